use crate::presentation::{FieldsViewModel, emit};
use crate::types::OutputFormat;
use anyhow::Result;
use propview_catalog::{amenity_vocabulary_of, is_registered};
use propview_engine::{form_layout, price_label};

pub fn handle(category: &str, format: OutputFormat) -> Result<()> {
    let registered = is_registered(category);
    if !registered {
        log::info!("'{}' is not a registered category", category);
    }

    let model = FieldsViewModel {
        category: category.to_string(),
        registered,
        price_label: price_label(category),
        sections: form_layout(category),
        amenities: amenity_vocabulary_of(category).to_vec(),
    };

    emit(&model, format)
}
