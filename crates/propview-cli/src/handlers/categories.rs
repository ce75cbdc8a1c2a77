use crate::presentation::{CategoriesViewModel, CategoryEntry, emit};
use crate::types::OutputFormat;
use anyhow::Result;
use propview_catalog::get_all_categories;

pub fn handle(format: OutputFormat) -> Result<()> {
    let categories = get_all_categories()
        .iter()
        .map(|spec| CategoryEntry {
            id: spec.id,
            label: spec.label,
            listing_type: spec.listing_type,
            amenities: spec.amenities.to_vec(),
        })
        .collect();

    emit(&CategoriesViewModel { categories }, format)
}
