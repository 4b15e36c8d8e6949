use std::path::Path;
use std::process;

use crate::schema::Schema;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_check(schema_path: &Path, output: OutputFormat, quiet: bool) {
    let schema = match Schema::load(schema_path) {
        Ok(s) => s,
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => {
            let keywords: Vec<serde_json::Value> = schema
                .keywords()
                .map(|(name, shape)| serde_json::json!({ "name": name, "shape": shape }))
                .collect();
            let json = serde_json::json!({ "keywords": keywords });
            println!(
                "{}",
                serde_json::to_string_pretty(&json)
                    .unwrap_or_else(|e| format!("serialization error: {}", e))
            );
        }
        OutputFormat::Text => {
            if !quiet {
                println!(
                    "{}: {} keyword(s)",
                    schema_path.display(),
                    schema.keywords().count()
                );
            }
            for (name, shape) in schema.keywords() {
                println!("  {:<24} {}", name, shape.as_str());
            }
        }
    }
}
