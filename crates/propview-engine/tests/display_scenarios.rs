//! Listing scenarios from real-shaped documents.

use propview_engine::{
    DetailRow, DetailView, NOT_PROVIDED, detail_view, display_text, displayable_fields,
    form_layout, section_of, should_show, validate, visible_sections,
};
use propview_testing::SampleRecords;
use propview_types::{DisplaySection, FieldName, FieldValue, PropertyRecord};
use std::collections::BTreeMap;

fn load(name: &str) -> PropertyRecord {
    SampleRecords::new().load(name).unwrap()
}

fn rendered(view: &DetailView) -> String {
    let mut lines = vec![format!("{}: {}", view.price_label, view.price)];
    for section in &view.sections {
        lines.push(format!("[{}]", section.title));
        for row in &section.rows {
            lines.push(format!("{}: {}", row.label, row.value));
        }
    }
    if !view.amenities.is_empty() {
        lines.push(format!("[Amenities] {}", view.amenities.join(", ")));
    }
    lines.join("\n")
}

#[test]
fn test_pg_boys_hides_bedrooms_and_formats_food() {
    let record = load(SampleRecords::PG_BOYS);
    assert!(!should_show("pg-boys", FieldName::Bedrooms));

    let fields = displayable_fields(&record);
    let names: Vec<FieldName> = fields.iter().map(|f| f.field).collect();
    assert_eq!(names, vec![FieldName::Occupancy, FieldName::FoodIncluded]);

    let food = &fields[1];
    assert_eq!(display_text(food, None), "No");
    assert_eq!(display_text(&fields[0], None), "Double Sharing");

    assert_eq!(
        visible_sections(&record),
        vec![DisplaySection::Features, DisplaySection::Amenities]
    );
}

#[test]
fn test_land_draft_without_price_is_valid() {
    let bag: BTreeMap<FieldName, FieldValue> = BTreeMap::from([
        (FieldName::LandType, FieldValue::from("plot")),
        (FieldName::AreaAcres, FieldValue::Number(2.5)),
        (FieldName::Bedrooms, FieldValue::Number(4.0)),
        (FieldName::LandFacing, FieldValue::from("north")),
        (FieldName::RoadAccess, FieldValue::Flag(true)),
        (FieldName::ConstructionStatus, FieldValue::from("ready")),
    ]);

    let report = validate("land-for-sale", &bag);
    assert!(report.valid);
    assert!(report.missing.is_empty());
}

#[test]
fn test_land_for_sale_is_valid_without_bedrooms() {
    let record = load(SampleRecords::LAND_FOR_SALE);

    let report = validate("land-for-sale", &record);
    assert!(report.valid);
    assert!(report.missing.is_empty());

    let names: Vec<FieldName> = displayable_fields(&record).iter().map(|f| f.field).collect();
    assert!(!names.contains(&FieldName::Bedrooms));
    assert_eq!(
        names,
        vec![
            FieldName::AreaAcres,
            FieldName::ConstructionStatus,
            FieldName::LandType,
            FieldName::LandFacing,
            FieldName::RoadAccess,
            FieldName::LegalClearances,
        ]
    );
}

#[test]
fn test_land_detail_view() {
    let view = detail_view(&load(SampleRecords::LAND_FOR_SALE));
    insta::assert_snapshot!(rendered(&view), @r"
    Price: ₹45.5 L
    [Property Dimensions]
    Area (Acres): 2.5 Acres
    [Features]
    Construction Status: Ready to Move
    [Land Details]
    Land Type: Residential Plot
    Land Facing: North-East
    Road Access: Yes
    Legal Clearances: Yes
    [Amenities] Boundary Wall, Water Connection
    ");
}

#[test]
fn test_flat_detail_view_keeps_zero_values() {
    let view = detail_view(&load(SampleRecords::FLAT_FOR_SALE));
    insta::assert_snapshot!(rendered(&view), @r"
    Price: ₹1.25 Cr
    [Property Dimensions]
    Bedrooms: 2
    Bathrooms: 2
    Balconies: 0
    Area: 1150 sq.ft
    Floor: Ground
    Total Floors: 12
    [Features]
    Facing: East
    Furnishing Status: Semi Furnished
    Construction Status: Ready to Move
    Property Age: 1-5 Years
    Parking: Covered Parking
    [Amenities] Lift, Power Backup
    ");
}

#[test]
fn test_incomplete_flat_report() {
    let record = load(SampleRecords::FLAT_INCOMPLETE);
    let report = validate(record.category.as_str(), &record);

    insta::assert_json_snapshot!(report, @r#"
    {
      "valid": false,
      "missing": [
        "areaUnit",
        "bathrooms",
        "area",
        "floor",
        "totalFloors",
        "furnishingStatus",
        "constructionStatus",
        "propertyAge"
      ]
    }
    "#);

    let view = detail_view(&record);
    let furnishing = view
        .sections
        .iter()
        .flat_map(|s| s.rows.iter())
        .find(|r| r.field == FieldName::FurnishingStatus)
        .unwrap();
    assert!(furnishing.missing);
    assert_eq!(furnishing.value, NOT_PROVIDED);

    // hidden for flats even though the document carries a value
    assert!(
        view.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .all(|r| r.field != FieldName::Washrooms)
    );
}

#[test]
fn test_unknown_category_degrades_to_optional() {
    let record = load(SampleRecords::UNKNOWN_CATEGORY);
    assert!(validate(record.category.as_str(), &record).valid);

    let view = detail_view(&record);
    assert_eq!(view.category_label, "haveli-for-sale");
    assert_eq!(view.price_label, "Price");
    assert_eq!(view.sections.len(), 1);
    assert_eq!(view.sections[0].rows[0].value, "9");
    assert_eq!(view.amenities, vec!["Courtyard".to_string()]);
}

#[test]
fn test_pg_hostel_form_requires_gate_time() {
    let layout = form_layout("pg-hostel-girls");
    let gate = layout
        .iter()
        .flat_map(|s| s.fields.iter())
        .find(|f| f.field == FieldName::GateClosingTime)
        .unwrap();
    assert!(gate.required);
    assert_eq!(gate.label, "Gate Closing Time");
}

#[test]
fn test_detail_rows_agree_with_validation_for_every_sample() {
    let samples = SampleRecords::new();
    for name in samples.names().unwrap() {
        let record = samples.load(&name).unwrap();
        let report = validate(record.category.as_str(), &record);
        let view = detail_view(&record);

        let rows: Vec<&DetailRow> = view.sections.iter().flat_map(|s| s.rows.iter()).collect();
        for row in &rows {
            assert_eq!(row.missing, report.is_missing(row.field), "{}: {:?}", name, row.field);
            if row.missing {
                assert_eq!(row.value, NOT_PROVIDED);
            }
        }
        for field in report.missing.iter().filter(|f| section_of(**f).is_some()) {
            assert!(
                rows.iter().any(|row| row.field == *field),
                "{}: missing {:?} has no row",
                name,
                field
            );
        }
    }
}
