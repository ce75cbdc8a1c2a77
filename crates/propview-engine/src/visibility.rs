use std::collections::BTreeSet;

use propview_catalog::visibility_of;
use propview_types::{FieldName, FieldSource, FieldVisibility};
use serde::{Deserialize, Serialize};

/// Field is rendered at all for this category (required or optional)
pub fn should_show(category: &str, field: FieldName) -> bool {
    visibility_of(category, field) != FieldVisibility::Hidden
}

pub fn is_required(category: &str, field: FieldName) -> bool {
    visibility_of(category, field) == FieldVisibility::Required
}

/// Fields that must be filled in before a listing of this category is saved
pub fn required_fields(category: &str) -> BTreeSet<FieldName> {
    FieldName::ALL
        .into_iter()
        .filter(|field| is_required(category, *field))
        .collect()
}

/// Required and optional fields; never includes hidden ones
pub fn visible_fields(category: &str) -> BTreeSet<FieldName> {
    FieldName::ALL
        .into_iter()
        .filter(|field| should_show(category, *field))
        .collect()
}

/// Outcome of checking a data bag against a category's required fields.
///
/// The caller decides what to do with it (block submit, highlight inputs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    /// Missing required fields in field declaration order
    pub missing: Vec<FieldName>,
}

impl ValidationReport {
    pub fn is_missing(&self, field: FieldName) -> bool {
        self.missing.contains(&field)
    }
}

/// Check that every required field of `category` holds a value.
///
/// Absent values and blank text are missing. Zero and `false` are accepted:
/// a ground-floor flat or a PG without meals is valid data.
pub fn validate<S: FieldSource + ?Sized>(category: &str, data: &S) -> ValidationReport {
    let missing: Vec<FieldName> = required_fields(category)
        .into_iter()
        .filter(|field| !data.has_value(*field))
        .collect();

    if !missing.is_empty() {
        log::debug!(
            "{} listing is missing {} required field(s)",
            category,
            missing.len()
        );
    }

    ValidationReport {
        valid: missing.is_empty(),
        missing,
    }
}
