use propview_types::*;

#[test]
fn test_land_record_from_value() -> anyhow::Result<()> {
    let value = serde_json::json!({
        "id": "lst_0192",
        "title": "2.5 acre plot on state highway",
        "category": "land-for-sale",
        "landType": "plot",
        "areaAcres": 2.5,
        "bedrooms": 4,
        "createdAt": "2026-03-04T10:15:00Z",
        "amenities": ["Gated Community"]
    });

    let record = PropertyRecord::from_json_value(value)?;

    assert_eq!(record.id.as_deref(), Some("lst_0192"));
    assert_eq!(record.area_acres, Some(2.5));
    assert_eq!(
        record.field_value(FieldName::LandType),
        Some(FieldValue::Text("plot".to_string()))
    );
    assert!(record.created_at.is_some());
    Ok(())
}

#[test]
fn test_record_serializes_camel_case_and_skips_absent() -> anyhow::Result<()> {
    let mut record = PropertyRecord::new("flat-for-rent");
    record.total_floors = Some(12);
    record.furnishing_status = Some("furnished".to_string());

    let json = serde_json::to_value(&record)?;
    assert_eq!(json["totalFloors"], 12);
    assert_eq!(json["furnishingStatus"], "furnished");
    assert!(json.get("bedrooms").is_none());
    assert!(json.get("foodIncluded").is_none());
    Ok(())
}

#[test]
fn test_wrongly_typed_field_is_rejected_at_boundary() {
    let result =
        PropertyRecord::from_json_str(r#"{"category": "flat-for-sale", "bedrooms": "three"}"#);
    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn test_every_field_maps_to_record() {
    // All scalar attributes can be set through serde and read back by name.
    let value = serde_json::json!({
        "category": "flat-for-sale",
        "price": 4500000,
        "areaUnit": "sqft",
        "bedrooms": 2, "bathrooms": 2, "balconies": 0, "washrooms": 1,
        "area": 1150, "areaAcres": 0.1, "floor": 0, "totalFloors": 4,
        "facing": "east", "furnishingStatus": "semi", "constructionStatus": "ready",
        "propertyAge": "1-5", "possessionStatus": "immediate", "occupancy": "single",
        "foodIncluded": true, "parking": "covered", "landType": "plot",
        "landFacing": "north", "roadAccess": true, "legalClearances": false,
        "attachedBathroom": true, "noticePeriod": 30, "gateClosingTime": "22:00",
        "amenities": ["Lift"]
    });
    let record = PropertyRecord::from_json_value(value).unwrap();

    for field in FieldName::ALL {
        assert!(
            record.field_value(field).is_some(),
            "field {} should be populated",
            field
        );
    }
}
