// Engine module - listing rules applied to records
// Sits between the compiled-in catalog and whatever renders the listing
// (editor, detail page, CLI). Everything here is pure and synchronous and is
// recomputed on every call rather than cached.

pub mod display;
pub mod format;
pub mod layout;
pub mod visibility;

pub use display::{
    DisplayField, SECTION_FIELDS, displayable_amenities, displayable_fields, has_section_content,
    section_of, should_display_field, visible_sections,
};
pub use format::{
    NOT_PROVIDED, area_unit_label, display_text, field_label, format_price, format_value,
    price_label,
};
pub use layout::{
    DetailRow, DetailSection, DetailView, FormField, FormSection, detail_view, form_layout,
};
pub use visibility::{
    ValidationReport, is_required, required_fields, should_show, validate, visible_fields,
};

pub use propview_catalog::visibility_of;
