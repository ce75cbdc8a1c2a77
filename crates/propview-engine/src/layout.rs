use propview_catalog::category_label;
use propview_types::{DisplaySection, FieldName, PropertyRecord};
use serde::Serialize;

use crate::display::{
    SECTION_FIELDS, displayable_amenities, displayable_fields, has_section_content,
};
use crate::format::{NOT_PROVIDED, display_text, field_label, format_price, price_label};
use crate::visibility::{is_required, should_show};

// ==========================================
// Editor layout
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub field: FieldName,
    pub label: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSection {
    pub section: DisplaySection,
    pub title: &'static str,
    pub fields: Vec<FormField>,
}

/// Inputs the listing editor renders for a category, grouped by section.
///
/// Hidden fields are dropped and sections left without inputs are omitted.
/// The amenities section carries a single `amenities` input.
pub fn form_layout(category: &str) -> Vec<FormSection> {
    DisplaySection::ALL
        .into_iter()
        .filter_map(|section| {
            let fields: Vec<FormField> = section_members(section)
                .filter(|field| should_show(category, *field))
                .map(|field| FormField {
                    field,
                    label: field_label(field),
                    required: is_required(category, field),
                })
                .collect();

            (!fields.is_empty()).then(|| FormSection {
                section,
                title: section.title(),
                fields,
            })
        })
        .collect()
}

fn section_members(section: DisplaySection) -> impl Iterator<Item = FieldName> {
    let amenities = (section == DisplaySection::Amenities).then_some(FieldName::Amenities);
    SECTION_FIELDS
        .iter()
        .filter(move |(_, s)| *s == section)
        .map(|(field, _)| *field)
        .chain(amenities)
}

// ==========================================
// Detail (read) view
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub field: FieldName,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
    /// Required field left empty by the poster
    pub missing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub section: DisplaySection,
    pub title: &'static str,
    pub rows: Vec<DetailRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub title: String,
    pub category: String,
    pub category_label: String,
    pub price_label: &'static str,
    /// Formatted price, or "Not provided"
    pub price: String,
    pub sections: Vec<DetailSection>,
    pub amenities: Vec<String>,
}

/// Everything the listing page renders below the gallery, derived fresh from the record.
pub fn detail_view(record: &PropertyRecord) -> DetailView {
    let category = record.category.as_str();
    let area_unit = record.area_unit.as_deref();
    let fields = displayable_fields(record);

    let sections = DisplaySection::ALL
        .into_iter()
        .filter(|section| *section != DisplaySection::Amenities)
        .filter_map(|section| {
            let rows: Vec<DetailRow> = fields
                .iter()
                .filter(|entry| entry.section == section)
                .map(|entry| DetailRow {
                    field: entry.field,
                    label: field_label(entry.field),
                    value: display_text(entry, area_unit),
                    required: is_required(category, entry.field),
                    missing: entry.value.is_none(),
                })
                .collect();

            (!rows.is_empty()).then(|| DetailSection {
                section,
                title: section.title(),
                rows,
            })
        })
        .collect();

    let amenities = if has_section_content(record, DisplaySection::Amenities) {
        displayable_amenities(record).to_vec()
    } else {
        Vec::new()
    };

    let price = record
        .price
        .map_or_else(|| NOT_PROVIDED.to_string(), format_price);

    DetailView {
        title: record.title.clone(),
        category: category.to_string(),
        category_label: category_label(category).to_string(),
        price_label: price_label(category),
        price,
        sections,
        amenities,
    }
}
