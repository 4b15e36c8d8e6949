mod commands;
mod schema;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Keyword-argument binder.
#[derive(Parser)]
#[command(
    name = "argbind",
    version,
    about = "Bind command tokens to keywords declared in a schema"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log parser activity to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse tokens against a keyword schema
    Parse {
        /// Path to the keyword schema (TOML)
        #[arg(long)]
        schema: PathBuf,
        /// Exit with status 1 on unparsed arguments or missing values
        #[arg(long)]
        strict: bool,
        /// Tokens to parse, given after `--`
        #[arg(last = true)]
        tokens: Vec<String>,
    },

    /// Validate a keyword schema and list its keywords
    Check {
        /// Path to the keyword schema (TOML)
        schema: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse {
            schema,
            strict,
            tokens,
        } => {
            commands::parse::cmd_parse(&schema, &tokens, strict, cli.output, cli.quiet);
        }
        Commands::Check { schema } => {
            commands::check::cmd_check(&schema, cli.output, cli.quiet);
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
