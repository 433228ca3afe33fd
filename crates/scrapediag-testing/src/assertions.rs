//! Custom assertions for scrapediag output.

use anyhow::{Context, Result};
use predicates::prelude::*;
use scrapediag_types::ArtifactKind;
use serde_json::Value;
use std::path::Path;

/// Assert that all four artifacts exist in `dir`.
pub fn assert_all_artifacts_written(dir: &Path) -> Result<()> {
    let missing: Vec<&str> = ArtifactKind::ALL
        .iter()
        .map(|k| k.file_name())
        .filter(|name| !dir.join(name).is_file())
        .collect();

    if !missing.is_empty() {
        anyhow::bail!("Missing artifacts in {}: {:?}", dir.display(), missing);
    }
    Ok(())
}

/// Assert that `dir` holds none of the artifacts.
pub fn assert_no_artifacts(dir: &Path) -> Result<()> {
    let present: Vec<&str> = ArtifactKind::ALL
        .iter()
        .map(|k| k.file_name())
        .filter(|name| dir.join(name).exists())
        .collect();

    if !present.is_empty() {
        anyhow::bail!("Expected no artifacts in {}, found {:?}", dir.display(), present);
    }
    Ok(())
}

/// Assert the four headline counts of a `--format json` collect or summarize run.
pub fn assert_summary_counts(
    json: &Value,
    trade_class: u64,
    dollar: u64,
    politician: u64,
    tables: u64,
) -> Result<()> {
    let summary = &json["content"]["summary"];
    if summary.is_null() {
        anyhow::bail!("Expected 'content.summary' object in JSON");
    }

    for (field, expected) in [
        ("trade_class_count", trade_class),
        ("dollar_count", dollar),
        ("politician_count", politician),
        ("table_count", tables),
    ] {
        let actual = summary[field]
            .as_u64()
            .with_context(|| format!("Expected numeric 'content.summary.{}'", field))?;
        if actual != expected {
            anyhow::bail!("Expected {} = {}, got {}", field, expected, actual);
        }
    }
    Ok(())
}

/// Assert that `text` contains every one of `needles`.
pub fn assert_contains_all(text: &str, needles: &[&str]) -> Result<()> {
    for needle in needles {
        if !predicate::str::contains(*needle).eval(text) {
            anyhow::bail!("Expected output to contain {:?}\n--- output ---\n{}", needle, text);
        }
    }
    Ok(())
}
