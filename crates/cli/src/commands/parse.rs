use std::path::Path;
use std::process;

use crate::schema::Schema;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_parse(
    schema_path: &Path,
    tokens: &[String],
    strict: bool,
    output: OutputFormat,
    quiet: bool,
) {
    let schema = match Schema::load(schema_path) {
        Ok(s) => s,
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    };

    let bound = schema.parse(tokens);

    match output {
        OutputFormat::Json => {
            let pretty = serde_json::to_string_pretty(&bound.to_json_value())
                .unwrap_or_else(|e| format!("serialization error: {}", e));
            println!("{}", pretty);
        }
        OutputFormat::Text => {
            for (name, slot) in &bound.values {
                println!("{} = {}", name, slot.render());
            }
            let outcome = &bound.outcome;
            if !quiet || !outcome.is_clean() {
                println!("parsed keywords: {}", outcome.parsed_keywords.join(" "));
                println!("unparsed arguments: {}", outcome.unparsed_arguments.join(" "));
                println!("missing values: {}", outcome.keywords_missing_value.join(" "));
            }
        }
    }

    if strict {
        if let Err(e) = bound.outcome.check() {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}
