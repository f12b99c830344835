//! Command-line front end for the template validator.

mod cli;
mod output;

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use message_templates::catalog::{Catalog, SimilarityMatcher};
use message_templates::config;
use message_templates::telemetry::{self, TelemetryConfig};
use message_templates::validator::{MessageTemplate, Validator};
use tracing::info;

use crate::cli::{Cli, Commands};

fn main() -> Result<ExitCode> {
    telemetry::init(&TelemetryConfig::default())?;

    let cli = Cli::parse();
    let limits = config::resolve(cli.config.as_deref()).context("loading validator config")?;
    let validator = Validator::new(Catalog::builtin(), limits);

    match cli.cmd {
        Commands::Check {
            title,
            description,
            body,
            body_file,
            output,
        } => {
            let body = match (body, body_file) {
                (Some(body), _) => body,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("reading template body from {}", path.display()))?,
                (None, None) => bail!("either --body or --body-file is required"),
            };

            let template = MessageTemplate::new(title, body).with_description(description);
            let verdict = validator.validate_template(&template);
            info!(valid = verdict.is_valid(), "checked template");
            output::print_verdict(&verdict, output)?;

            Ok(if verdict.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Catalog { output } => {
            output::print_catalog(validator.catalog(), output)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Suggest { name } => {
            let matcher = SimilarityMatcher::new(validator.catalog())
                .with_threshold(validator.config().similarity_threshold);
            match matcher.suggest(&name) {
                Some(candidate) => {
                    println!("{}", candidate.token());
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    println!("no close match for `{name}`");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
