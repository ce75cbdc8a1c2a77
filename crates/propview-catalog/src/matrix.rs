use propview_types::{FieldName, FieldVisibility};

use FieldName::*;

/// Visibility of one field within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: FieldName,
    pub visibility: FieldVisibility,
}

impl FieldRule {
    pub const fn new(field: FieldName, visibility: FieldVisibility) -> Self {
        Self { field, visibility }
    }
}

const fn req(field: FieldName) -> FieldRule {
    FieldRule::new(field, FieldVisibility::Required)
}

const fn opt(field: FieldName) -> FieldRule {
    FieldRule::new(field, FieldVisibility::Optional)
}

const fn hid(field: FieldName) -> FieldRule {
    FieldRule::new(field, FieldVisibility::Hidden)
}

// NOTE: Each category keeps its own literal rule list on purpose.
// The data overlaps without being consistent (flat-for-sale requires
// propertyAge, flat-for-rent does not; hostels require a gate closing time,
// plain PGs do not), so a shared residential base would need overrides
// everywhere. Fields missing from a list are optional.

const LAND_FOR_SALE: &[FieldRule] = &[
    opt(Price),
    req(LandType),
    req(AreaAcres),
    req(LandFacing),
    req(RoadAccess),
    req(ConstructionStatus),
    opt(LegalClearances),
    opt(AreaUnit),
    hid(Bedrooms),
    hid(Bathrooms),
    hid(Balconies),
    hid(Washrooms),
    hid(Area),
    hid(Floor),
    hid(TotalFloors),
    hid(Facing),
    hid(FurnishingStatus),
    hid(PropertyAge),
    hid(PossessionStatus),
    hid(Occupancy),
    hid(FoodIncluded),
    hid(Parking),
    hid(AttachedBathroom),
    hid(NoticePeriod),
    hid(GateClosingTime),
];

const FLAT_FOR_SALE: &[FieldRule] = &[
    opt(Price),
    req(Bedrooms),
    req(Bathrooms),
    req(Area),
    req(AreaUnit),
    req(Floor),
    req(TotalFloors),
    req(FurnishingStatus),
    req(ConstructionStatus),
    req(PropertyAge),
    opt(Balconies),
    opt(Facing),
    opt(PossessionStatus),
    opt(Parking),
    hid(Washrooms),
    hid(AreaAcres),
    hid(Occupancy),
    hid(FoodIncluded),
    hid(LandType),
    hid(LandFacing),
    hid(RoadAccess),
    hid(LegalClearances),
    hid(AttachedBathroom),
    hid(NoticePeriod),
    hid(GateClosingTime),
];

const HOUSE_FOR_SALE: &[FieldRule] = &[
    opt(Price),
    req(Bedrooms),
    req(Bathrooms),
    req(Area),
    req(AreaUnit),
    req(TotalFloors),
    req(ConstructionStatus),
    opt(Balconies),
    opt(Facing),
    opt(FurnishingStatus),
    opt(PropertyAge),
    opt(PossessionStatus),
    opt(Parking),
    opt(RoadAccess),
    hid(Floor),
    hid(Washrooms),
    hid(AreaAcres),
    hid(Occupancy),
    hid(FoodIncluded),
    hid(LandType),
    hid(LandFacing),
    hid(LegalClearances),
    hid(AttachedBathroom),
    hid(NoticePeriod),
    hid(GateClosingTime),
];

const HOUSE_FOR_RENT: &[FieldRule] = &[
    opt(Price),
    req(Bedrooms),
    req(Bathrooms),
    req(Area),
    req(FurnishingStatus),
    opt(AreaUnit),
    opt(Balconies),
    opt(TotalFloors),
    opt(Facing),
    opt(Parking),
    opt(NoticePeriod),
    hid(Floor),
    hid(Washrooms),
    hid(AreaAcres),
    hid(ConstructionStatus),
    hid(PossessionStatus),
    hid(Occupancy),
    hid(FoodIncluded),
    hid(LandType),
    hid(LandFacing),
    hid(RoadAccess),
    hid(LegalClearances),
    hid(AttachedBathroom),
    hid(GateClosingTime),
];

const FLAT_FOR_RENT: &[FieldRule] = &[
    opt(Price),
    req(Bedrooms),
    req(Bathrooms),
    req(Area),
    req(Floor),
    req(FurnishingStatus),
    opt(AreaUnit),
    opt(Balconies),
    opt(TotalFloors),
    opt(Facing),
    opt(PropertyAge),
    opt(Parking),
    opt(NoticePeriod),
    hid(Washrooms),
    hid(AreaAcres),
    hid(ConstructionStatus),
    hid(PossessionStatus),
    hid(Occupancy),
    hid(FoodIncluded),
    hid(LandType),
    hid(LandFacing),
    hid(RoadAccess),
    hid(LegalClearances),
    hid(AttachedBathroom),
    hid(GateClosingTime),
];

const OFFICE_FOR_RENT_LEASE: &[FieldRule] = &[
    opt(Price),
    req(Area),
    req(Floor),
    req(FurnishingStatus),
    opt(AreaUnit),
    opt(Washrooms),
    opt(TotalFloors),
    opt(Facing),
    opt(PossessionStatus),
    opt(Parking),
    opt(NoticePeriod),
    hid(Bedrooms),
    hid(Bathrooms),
    hid(Balconies),
    hid(AreaAcres),
    hid(PropertyAge),
    hid(Occupancy),
    hid(FoodIncluded),
    hid(LandType),
    hid(LandFacing),
    hid(RoadAccess),
    hid(LegalClearances),
    hid(AttachedBathroom),
    hid(GateClosingTime),
];

const COMMERCIAL_SPACE_FOR_RENT_LEASE: &[FieldRule] = &[
    opt(Price),
    req(Area),
    req(ConstructionStatus),
    opt(AreaUnit),
    opt(Washrooms),
    opt(Floor),
    opt(TotalFloors),
    opt(Facing),
    opt(FurnishingStatus),
    opt(Parking),
    opt(RoadAccess),
    hid(Bedrooms),
    hid(Bathrooms),
    hid(Balconies),
    hid(AreaAcres),
    hid(Occupancy),
    hid(FoodIncluded),
    hid(LandType),
    hid(LandFacing),
    hid(AttachedBathroom),
    hid(NoticePeriod),
    hid(GateClosingTime),
];

const PG_HOSTEL_BOYS: &[FieldRule] = &[
    opt(Price),
    req(Occupancy),
    req(FoodIncluded),
    req(GateClosingTime),
    opt(FurnishingStatus),
    opt(AttachedBathroom),
    opt(NoticePeriod),
    opt(Bathrooms),
    hid(Bedrooms),
    hid(Balconies),
    hid(Washrooms),
    hid(Area),
    hid(AreaUnit),
    hid(AreaAcres),
    hid(TotalFloors),
    hid(ConstructionStatus),
    hid(PropertyAge),
    hid(PossessionStatus),
    hid(LandType),
    hid(LandFacing),
    hid(RoadAccess),
    hid(LegalClearances),
];

const PG_HOSTEL_GIRLS: &[FieldRule] = &[
    opt(Price),
    req(Occupancy),
    req(FoodIncluded),
    req(GateClosingTime),
    opt(FurnishingStatus),
    opt(AttachedBathroom),
    opt(NoticePeriod),
    opt(Bathrooms),
    hid(Bedrooms),
    hid(Balconies),
    hid(Washrooms),
    hid(Area),
    hid(AreaUnit),
    hid(AreaAcres),
    hid(TotalFloors),
    hid(ConstructionStatus),
    hid(PropertyAge),
    hid(PossessionStatus),
    hid(Parking),
    hid(LandType),
    hid(LandFacing),
    hid(RoadAccess),
    hid(LegalClearances),
];

const PG_BOYS: &[FieldRule] = &[
    opt(Price),
    req(Occupancy),
    req(FoodIncluded),
    opt(FurnishingStatus),
    opt(AttachedBathroom),
    opt(NoticePeriod),
    opt(GateClosingTime),
    opt(Floor),
    hid(Bedrooms),
    hid(Bathrooms),
    hid(Balconies),
    hid(Washrooms),
    hid(Area),
    hid(AreaUnit),
    hid(AreaAcres),
    hid(TotalFloors),
    hid(ConstructionStatus),
    hid(PropertyAge),
    hid(PossessionStatus),
    hid(LandType),
    hid(LandFacing),
    hid(RoadAccess),
    hid(LegalClearances),
];

const PG_GIRLS: &[FieldRule] = &[
    opt(Price),
    req(Occupancy),
    req(FoodIncluded),
    opt(FurnishingStatus),
    opt(AttachedBathroom),
    opt(NoticePeriod),
    opt(GateClosingTime),
    opt(Floor),
    hid(Bedrooms),
    hid(Bathrooms),
    hid(Balconies),
    hid(Washrooms),
    hid(Area),
    hid(AreaUnit),
    hid(AreaAcres),
    hid(TotalFloors),
    hid(ConstructionStatus),
    hid(PropertyAge),
    hid(PossessionStatus),
    hid(Parking),
    hid(LandType),
    hid(LandFacing),
    hid(RoadAccess),
    hid(LegalClearances),
];

/// Category id → rule list. Must cover exactly the registered categories.
const MATRIX: &[(&str, &[FieldRule])] = &[
    ("land-for-sale", LAND_FOR_SALE),
    ("flat-for-sale", FLAT_FOR_SALE),
    ("house-for-sale", HOUSE_FOR_SALE),
    ("house-for-rent", HOUSE_FOR_RENT),
    ("flat-for-rent", FLAT_FOR_RENT),
    ("office-for-rent-lease", OFFICE_FOR_RENT_LEASE),
    ("commercial-space-for-rent-lease", COMMERCIAL_SPACE_FOR_RENT_LEASE),
    ("pg-hostel-boys", PG_HOSTEL_BOYS),
    ("pg-hostel-girls", PG_HOSTEL_GIRLS),
    ("pg-boys", PG_BOYS),
    ("pg-girls", PG_GIRLS),
];

/// Category ids present in the matrix, in table order
pub fn matrix_categories() -> Vec<&'static str> {
    MATRIX.iter().map(|(id, _)| *id).collect()
}

/// Explicit rules for a category, or `None` when the category is unmapped
pub fn rules_for(category: &str) -> Option<&'static [FieldRule]> {
    MATRIX
        .iter()
        .find(|(id, _)| *id == category)
        .map(|(_, rules)| *rules)
}

/// Visibility of a field for a category.
///
/// Anything not listed is `Optional`: a newly introduced field shows up
/// everywhere until it is curated into `Hidden` for categories where it does
/// not apply. Unmapped categories therefore treat every field as optional.
pub fn visibility_of(category: &str, field: FieldName) -> FieldVisibility {
    let Some(rules) = rules_for(category) else {
        log::debug!(
            "category '{}' is not in the visibility matrix; '{}' defaults to optional",
            category,
            field
        );
        return FieldVisibility::Optional;
    };

    rules
        .iter()
        .find(|rule| rule.field == field)
        .map_or(FieldVisibility::Optional, |rule| rule.visibility)
}
