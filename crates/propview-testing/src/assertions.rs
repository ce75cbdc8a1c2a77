//! Assertions over `propview --format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the `missing` list of a validation report, in order.
pub fn assert_missing_fields(json: &Value, expected: &[&str]) -> Result<()> {
    let missing: Vec<&str> = json["missing"]
        .as_array()
        .context("Expected 'missing' array in JSON")?
        .iter()
        .filter_map(Value::as_str)
        .collect();

    if missing != expected {
        anyhow::bail!("Expected missing fields {:?}, got {:?}", expected, missing);
    }

    Ok(())
}

/// Assert the section order of a detail view.
pub fn assert_section_titles(json: &Value, expected: &[&str]) -> Result<()> {
    let titles: Vec<&str> = json["sections"]
        .as_array()
        .context("Expected 'sections' array in JSON")?
        .iter()
        .map(|section| section["title"].as_str().unwrap_or_default())
        .collect();

    if titles != expected {
        anyhow::bail!("Expected sections {:?}, got {:?}", expected, titles);
    }

    Ok(())
}

/// Find the rendered value of a detail row by field name.
pub fn detail_value<'a>(json: &'a Value, field: &str) -> Result<&'a str> {
    let sections = json["sections"]
        .as_array()
        .context("Expected 'sections' array in JSON")?;

    sections
        .iter()
        .filter_map(|section| section["rows"].as_array())
        .flatten()
        .find(|row| row["field"] == field)
        .and_then(|row| row["value"].as_str())
        .with_context(|| format!("No detail row for field '{}'", field))
}

/// Assert that no section of a detail view renders `field`.
pub fn assert_field_absent(json: &Value, field: &str) -> Result<()> {
    if detail_value(json, field).is_ok() {
        anyhow::bail!("Field '{}' should not be displayed", field);
    }
    Ok(())
}
