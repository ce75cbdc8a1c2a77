use super::load_record;
use crate::presentation::{ValidationViewModel, emit};
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::Path;

/// Report missing required fields; fails (non-zero exit) when any are missing.
pub fn handle(path: &Path, format: OutputFormat) -> Result<()> {
    let record = load_record(path)?;
    let report = propview_engine::validate(record.category.as_str(), &record);

    let model = ValidationViewModel {
        file: path.display().to_string(),
        title: record.title.clone(),
        category: record.category.to_string(),
        valid: report.valid,
        missing: report.missing.clone(),
    };
    emit(&model, format)?;

    if !report.valid {
        anyhow::bail!(
            "{} required field(s) missing in {}",
            report.missing.len(),
            path.display()
        );
    }
    Ok(())
}
