use propview_types::{DisplaySection, FieldName, FieldSource, FieldValue, PropertyRecord};
use serde::Serialize;

use crate::visibility::{is_required, should_show};

use DisplaySection::{Dimensions, Features, Land, Pg};

/// Fixed field → section assignment, in render order.
///
/// `price` and `areaUnit` belong to the listing header and amenities feed
/// their own section, so none of them appear here.
pub const SECTION_FIELDS: &[(FieldName, DisplaySection)] = &[
    (FieldName::Bedrooms, Dimensions),
    (FieldName::Bathrooms, Dimensions),
    (FieldName::Balconies, Dimensions),
    (FieldName::Washrooms, Dimensions),
    (FieldName::Area, Dimensions),
    (FieldName::AreaAcres, Dimensions),
    (FieldName::Floor, Dimensions),
    (FieldName::TotalFloors, Dimensions),
    (FieldName::Facing, Features),
    (FieldName::FurnishingStatus, Features),
    (FieldName::ConstructionStatus, Features),
    (FieldName::PropertyAge, Features),
    (FieldName::PossessionStatus, Features),
    (FieldName::Occupancy, Features),
    (FieldName::FoodIncluded, Features),
    (FieldName::Parking, Features),
    (FieldName::LandType, Land),
    (FieldName::LandFacing, Land),
    (FieldName::RoadAccess, Land),
    (FieldName::LegalClearances, Land),
    (FieldName::AttachedBathroom, Pg),
    (FieldName::NoticePeriod, Pg),
    (FieldName::GateClosingTime, Pg),
];

/// Section a field is rendered in, if any
pub fn section_of(field: FieldName) -> Option<DisplaySection> {
    SECTION_FIELDS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, section)| *section)
}

/// One field that survived display filtering for a record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayField {
    pub field: FieldName,
    /// `None` only for required fields the poster left empty.
    pub value: Option<FieldValue>,
    pub section: DisplaySection,
}

/// Decide whether a single field is rendered.
///
/// Hidden wins over any data; required fields always render so the view can
/// show a "not provided" affordance; optional fields render when populated.
pub fn should_display_field(category: &str, field: FieldName, value: Option<&FieldValue>) -> bool {
    if !should_show(category, field) {
        return false;
    }
    if is_required(category, field) {
        return true;
    }
    value.is_some_and(|v| !v.is_blank())
}

/// Fields of `record` worth rendering, in section table order
pub fn displayable_fields(record: &PropertyRecord) -> Vec<DisplayField> {
    let category = record.category.as_str();

    SECTION_FIELDS
        .iter()
        .filter_map(|(field, section)| {
            let value = record.field_value(*field);
            should_display_field(category, *field, value.as_ref()).then(|| DisplayField {
                field: *field,
                value: value.filter(|v| !v.is_blank()),
                section: *section,
            })
        })
        .collect()
}

/// Amenities stored on the record, unfiltered.
///
/// Selected amenities are free-form once saved; one that has since left the
/// category's vocabulary is still shown.
pub fn displayable_amenities(record: &PropertyRecord) -> &[String] {
    &record.amenities
}

/// Section has at least one field (or amenity) to render.
pub fn has_section_content(record: &PropertyRecord, section: DisplaySection) -> bool {
    if section == DisplaySection::Amenities {
        return should_show(record.category.as_str(), FieldName::Amenities)
            && !displayable_amenities(record).is_empty();
    }

    displayable_fields(record)
        .iter()
        .any(|entry| entry.section == section)
}

/// Sections to render for a record, in canonical order
pub fn visible_sections(record: &PropertyRecord) -> Vec<DisplaySection> {
    DisplaySection::ALL
        .into_iter()
        .filter(|section| has_section_content(record, *section))
        .collect()
}
