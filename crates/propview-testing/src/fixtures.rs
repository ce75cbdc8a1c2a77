//! Sample listing records.
//!
//! One JSON document per scenario, shaped like the stored documents the
//! listing pages read.

use anyhow::{Context, Result};
use propview_types::PropertyRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Sample file manager for listing records.
pub struct SampleRecords {
    samples_dir: PathBuf,
}

impl Default for SampleRecords {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleRecords {
    /// PG for boys: double sharing, no meals, stray bedroom count
    pub const PG_BOYS: &'static str = "pg_boys.json";
    /// Plot with every land requirement filled in, plus a stray bedroom count
    pub const LAND_FOR_SALE: &'static str = "land_for_sale.json";
    /// Complete ground-floor flat with no balconies
    pub const FLAT_FOR_SALE: &'static str = "flat_for_sale.json";
    /// Flat listing missing most required fields
    pub const FLAT_INCOMPLETE: &'static str = "flat_incomplete.json";
    /// Category absent from the registry
    pub const UNKNOWN_CATEGORY: &'static str = "unknown_category.json";

    /// Samples live in `crates/propview-testing/samples/`.
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        Self {
            samples_dir: manifest_dir.join("samples"),
        }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn read(&self, sample_name: &str) -> Result<String> {
        let path = self.path(sample_name);
        fs::read_to_string(&path).with_context(|| format!("reading sample {}", path.display()))
    }

    /// Parse a sample as a validated record
    pub fn load(&self, sample_name: &str) -> Result<PropertyRecord> {
        PropertyRecord::from_json_str(&self.read(sample_name)?)
            .with_context(|| format!("parsing sample {}", sample_name))
    }

    /// Copy a sample into `dest_dir`, keeping its file name.
    pub fn copy_to(&self, sample_name: &str, dest_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dest_dir)?;
        let dest = dest_dir.join(sample_name);
        fs::copy(self.path(sample_name), &dest)?;
        Ok(dest)
    }

    /// Every sample file name, sorted
    pub fn names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = fs::read_dir(&self.samples_dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(".json"))
            .collect();
        names.sort();
        Ok(names)
    }
}
