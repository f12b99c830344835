//! CLI argument parsing via `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "validate-template",
    version,
    about = "Validate bracketed message templates",
    long_about = "Check message templates for placeholder, length, and delimiter problems before saving them.\n\nConfiguration precedence: --config > $TEMPLATE_VALIDATOR_CONFIG > defaults.",
    after_help = "Examples:\n  validate-template check --title Saludo --body 'Hola [NOMBRE], ¿cómo estás?'\n  validate-template check --title Oferta --body-file oferta.txt --output json\n  validate-template suggest NOMRE",
    arg_required_else_help = true
)]
/// Top-level options and subcommands.
pub struct Cli {
    /// Path to a JSON file with validation limits.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Validate a template and print its findings
    Check {
        #[arg(long, default_value = "", help = "Template title")]
        title: String,
        #[arg(long, default_value = "", help = "Template description")]
        description: String,
        #[arg(long, conflicts_with = "body_file", help = "Template body text")]
        body: Option<String>,
        #[arg(long, help = "Read the template body from a file")]
        body_file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Output::Human)]
        output: Output,
    },
    /// List recognized placeholders by category
    Catalog {
        #[arg(long, value_enum, default_value_t = Output::Human)]
        output: Output,
    },
    /// Suggest a recognized placeholder for a name
    Suggest {
        /// Placeholder name to correct
        name: String,
    },
}

/// Output mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// Grouped, human-readable text.
    Human,
    /// Pretty-printed JSON.
    Json,
}
