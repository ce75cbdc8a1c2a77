use propview_catalog::*;
use propview_types::{FieldName, FieldVisibility};

#[test]
fn test_registry_and_matrix_cover_the_same_categories() {
    let registry: Vec<&str> = get_all_categories().iter().map(|spec| spec.id).collect();
    let matrix = matrix_categories();

    for id in &registry {
        assert!(matrix.contains(id), "{} is registered but has no matrix entry", id);
    }
    for id in &matrix {
        assert!(is_registered(id), "{} has matrix rules but is not registered", id);
    }
    assert_eq!(registry.len(), matrix.len());
}

#[test]
fn test_price_is_optional_in_every_category() {
    for category in list_categories() {
        assert_eq!(
            visibility_of(category.as_str(), FieldName::Price),
            FieldVisibility::Optional,
            "{} should leave price optional",
            category
        );
    }
}

#[test]
fn test_every_category_has_an_amenity_vocabulary() {
    for spec in get_all_categories() {
        assert!(!spec.amenities.is_empty(), "{} has no amenities", spec.id);
        assert_eq!(amenity_vocabulary_of(spec.id), spec.amenities);
    }
}

#[test]
fn test_pg_categories_share_core_requirements() {
    for id in ["pg-hostel-boys", "pg-hostel-girls", "pg-boys", "pg-girls"] {
        assert_eq!(visibility_of(id, FieldName::Bedrooms), FieldVisibility::Hidden);
        assert_eq!(visibility_of(id, FieldName::Occupancy), FieldVisibility::Required);
        assert_eq!(visibility_of(id, FieldName::FoodIncluded), FieldVisibility::Required);
    }
}

#[test]
fn test_land_for_sale_requirements() {
    let required: Vec<FieldName> = rules_for("land-for-sale")
        .unwrap()
        .iter()
        .filter(|rule| rule.visibility == FieldVisibility::Required)
        .map(|rule| rule.field)
        .collect();

    for field in [
        FieldName::LandType,
        FieldName::AreaAcres,
        FieldName::LandFacing,
        FieldName::RoadAccess,
        FieldName::ConstructionStatus,
    ] {
        assert!(required.contains(&field), "land-for-sale should require {}", field);
    }
    assert_eq!(
        visibility_of("land-for-sale", FieldName::Bedrooms),
        FieldVisibility::Hidden
    );
}
