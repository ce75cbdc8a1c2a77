pub mod categories;
pub mod fields;
pub mod image;
pub mod resolve;
pub mod show;
pub mod validate;

use anyhow::{Context, Result};
use propview_types::PropertyRecord;
use std::path::Path;

/// Read and validate a listing document from disk
pub(crate) fn load_record(path: &Path) -> Result<PropertyRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    PropertyRecord::from_json_str(&content).with_context(|| format!("parsing {}", path.display()))
}
