//! Matrix and display laws checked over every category and field.

use propview_catalog::{list_categories, matrix_categories, rules_for};
use propview_engine::{
    SECTION_FIELDS, displayable_fields, has_section_content, is_required, should_show, validate,
    visibility_of,
};
use propview_types::{DisplaySection, FieldName, FieldVisibility, PropertyRecord};
use serde_json::json;

/// Every field populated with a non-blank value of the right shape
fn full_record(category: &str) -> PropertyRecord {
    PropertyRecord::from_json_value(json!({
        "title": "Everything filled in",
        "category": category,
        "price": 25000,
        "areaUnit": "sqft",
        "bedrooms": 3,
        "bathrooms": 2,
        "balconies": 1,
        "washrooms": 2,
        "area": 1400,
        "areaAcres": 1.5,
        "floor": 4,
        "totalFloors": 10,
        "facing": "north",
        "furnishingStatus": "furnished",
        "constructionStatus": "ready",
        "propertyAge": "1-5",
        "possessionStatus": "immediate",
        "occupancy": "single",
        "foodIncluded": true,
        "parking": "open",
        "landType": "plot",
        "landFacing": "south",
        "roadAccess": true,
        "legalClearances": true,
        "attachedBathroom": true,
        "noticePeriod": 30,
        "gateClosingTime": "22:00",
        "amenities": ["Lift"]
    }))
    .unwrap()
}

fn categories() -> Vec<String> {
    let mut ids: Vec<String> = list_categories()
        .into_iter()
        .map(|c| c.as_str().to_string())
        .collect();
    ids.push("not-a-category".to_string());
    ids
}

#[test]
fn test_unlisted_pairs_default_to_optional() {
    for category in matrix_categories() {
        let rules = rules_for(category).unwrap();
        for field in FieldName::ALL {
            if rules.iter().all(|rule| rule.field != field) {
                assert_eq!(
                    visibility_of(category, field),
                    FieldVisibility::Optional,
                    "{} / {}",
                    category,
                    field
                );
            }
        }
    }

    for field in FieldName::ALL {
        assert_eq!(visibility_of("not-a-category", field), FieldVisibility::Optional);
    }
}

#[test]
fn test_hidden_fields_never_displayed() {
    for category in categories() {
        let record = full_record(&category);
        let displayed: Vec<FieldName> =
            displayable_fields(&record).iter().map(|f| f.field).collect();

        for field in FieldName::ALL {
            if visibility_of(&category, field) == FieldVisibility::Hidden {
                assert!(!should_show(&category, field));
                assert!(
                    !displayed.contains(&field),
                    "{} displayed for {} despite being hidden",
                    field,
                    category
                );
            }
        }
    }
}

#[test]
fn test_required_fields_surface_when_empty() {
    for category in categories() {
        let empty = PropertyRecord::new(category.as_str());
        let displayed = displayable_fields(&empty);
        let report = validate(&category, &empty);

        for (field, _) in SECTION_FIELDS {
            let entry = displayed.iter().find(|f| f.field == *field);
            if is_required(&category, *field) {
                assert_eq!(entry.map(|f| &f.value), Some(&None), "{} / {}", category, field);
                assert!(report.is_missing(*field));
            } else {
                assert!(entry.is_none(), "{} / {} shown while empty", category, field);
            }
        }

        let full = full_record(&category);
        assert!(validate(&category, &full).valid, "{} full record invalid", category);
    }
}

#[test]
fn test_missing_reported_exactly_for_required() {
    for category in categories() {
        let report = validate(&category, &PropertyRecord::new(category.as_str()));
        let expected: Vec<FieldName> = FieldName::ALL
            .into_iter()
            .filter(|field| is_required(&category, *field))
            .collect();
        assert_eq!(report.missing, expected, "{}", category);
        assert_eq!(report.valid, expected.is_empty());
    }
}

#[test]
fn test_section_emptiness() {
    let sections = [
        DisplaySection::Dimensions,
        DisplaySection::Features,
        DisplaySection::Land,
        DisplaySection::Pg,
    ];

    for category in categories() {
        let members = |section: DisplaySection| {
            SECTION_FIELDS
                .iter()
                .filter(move |(_, s)| *s == section)
                .map(|(field, _)| *field)
        };

        let empty = PropertyRecord::new(category.as_str());
        let full = full_record(&category);
        for section in sections {
            // empty record: content only through required fields
            let expected = members(section).any(|field| is_required(&category, field));
            assert_eq!(
                has_section_content(&empty, section),
                expected,
                "{} / {}",
                category,
                section
            );

            // full record: content unless every member is hidden
            let expected = members(section).any(|field| should_show(&category, field));
            assert_eq!(has_section_content(&full, section), expected, "{} / {}", category, section);
        }

        assert!(!has_section_content(&empty, DisplaySection::Amenities));
        assert_eq!(
            has_section_content(&full, DisplaySection::Amenities),
            should_show(&category, FieldName::Amenities)
        );
    }
}
