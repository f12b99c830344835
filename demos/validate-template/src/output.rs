//! Human and JSON printers for verdicts and the catalog.

use anyhow::Result;
use message_templates::catalog::Catalog;
use message_templates::validator::{FindingKind, Verdict};
use serde_json::json;

use crate::cli::Output;

/// Prints a verdict grouped by finding kind, followed by the placeholders.
pub fn print_verdict(verdict: &Verdict, output: Output) -> Result<()> {
    if output == Output::Json {
        println!("{}", serde_json::to_string_pretty(verdict)?);
        return Ok(());
    }

    if verdict.is_clean() {
        println!("✔ template is valid");
    }
    for (kind, icon) in [
        (FindingKind::Error, "✖"),
        (FindingKind::Warning, "▲"),
        (FindingKind::Suggestion, "◆"),
    ] {
        for finding in verdict.of_kind(kind) {
            println!("{icon} {finding}");
        }
    }

    if !verdict.placeholders().is_empty() {
        println!("\nDetected placeholders:");
        for placeholder in verdict.placeholders() {
            let status = if placeholder.is_name_valid() { "ok" } else { "malformed" };
            println!("  [{}] {} ({status})", placeholder.name(), placeholder.span());
        }
    }

    println!(
        "\n— Summary — valid={} errors={} warnings={} suggestions={}",
        verdict.is_valid(),
        verdict.errors().count(),
        verdict.warnings().count(),
        verdict.suggestions().count()
    );
    Ok(())
}

/// Prints catalog entries grouped by category.
pub fn print_catalog(catalog: &Catalog, output: Output) -> Result<()> {
    if output == Output::Json {
        let groups: Vec<_> = catalog
            .by_category()
            .into_iter()
            .map(|(category, entries)| json!({ "category": category, "entries": entries }))
            .collect();
        let out = json!({ "version": catalog.version(), "categories": groups });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Placeholder catalog v{}", catalog.version());
    for (category, entries) in catalog.by_category() {
        println!("\n{category}");
        for entry in entries {
            println!("  {:<16} {}", entry.name().token(), entry.description());
        }
    }
    Ok(())
}
