//! End-to-end runs of the `propview` binary in an isolated environment.

use propview_testing::assertions::{
    assert_field_absent, assert_missing_fields, assert_section_titles, detail_value,
};
use propview_testing::{SampleRecords, TestWorld};

#[test]
fn test_categories_json_lists_registry_in_order() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["--format", "json", "categories"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 11);
    assert_eq!(categories[0]["id"], "land-for-sale");
    assert_eq!(categories[0]["listing_type"], "sale");
    assert_eq!(categories[7]["id"], "pg-hostel-boys");
    Ok(())
}

#[test]
fn test_fields_for_pg_hide_bedrooms() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["fields", "pg-boys"])?;
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.contains("Monthly Rent"));
    assert!(stdout.contains("Occupancy"));
    assert!(stdout.contains("Gate Closing Time"));
    assert!(!stdout.contains("Bedrooms"));
    assert!(stdout.contains("Wi-Fi"));
    Ok(())
}

#[test]
fn test_fields_for_unknown_category() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["--format", "json", "fields", "castle-for-sale"])?;
    assert!(result.success());

    let json = result.json()?;
    assert_eq!(json["registered"], false);
    assert_eq!(json["price_label"], "Price");
    assert_eq!(json["amenities"].as_array().map(Vec::len), Some(0));
    Ok(())
}

#[test]
fn test_validate_complete_land_listing() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample(SampleRecords::LAND_FOR_SALE);
    let result = world.run(&["--format", "json", "validate", SampleRecords::LAND_FOR_SALE])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    assert_eq!(json["valid"], true);
    assert_missing_fields(&json, &[])?;
    Ok(())
}

#[test]
fn test_validate_incomplete_flat_fails() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample(SampleRecords::FLAT_INCOMPLETE);
    let result = world.run(&["--format", "json", "validate", SampleRecords::FLAT_INCOMPLETE])?;
    assert!(!result.success());
    assert!(result.stderr().contains("8 required field(s) missing"));

    let json = result.json()?;
    assert_missing_fields(
        &json,
        &[
            "areaUnit",
            "bathrooms",
            "area",
            "floor",
            "totalFloors",
            "furnishingStatus",
            "constructionStatus",
            "propertyAge",
        ],
    )?;
    Ok(())
}

#[test]
fn test_validate_rejects_record_without_category() -> anyhow::Result<()> {
    let world = TestWorld::new().with_record(
        "blank.json",
        &serde_json::json!({ "title": "No category", "category": "  " }),
    );
    let result = world.run(&["validate", "blank.json"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("category must not be empty"));
    Ok(())
}

#[test]
fn test_show_pg_listing() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample(SampleRecords::PG_BOYS);
    let result = world.run(&["--format", "json", "show", SampleRecords::PG_BOYS])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    assert_eq!(json["price_label"], "Monthly Rent");
    assert_eq!(json["price"], "₹8,500");
    assert_section_titles(&json, &["Features"])?;
    assert_eq!(detail_value(&json, "occupancy")?, "Double Sharing");
    assert_eq!(detail_value(&json, "foodIncluded")?, "No");
    assert_field_absent(&json, "bedrooms")?;
    assert_eq!(json["amenities"], serde_json::json!(["Wi-Fi", "Laundry"]));

    // primary image is the lowest order, not the first listed
    assert_eq!(
        json["image"]["preload_url"],
        "https://ik.imagekit.io/acme/tr:q-80,f-webp/listings/pg-2291/front.jpg"
    );
    Ok(())
}

#[test]
fn test_show_plain_marks_missing_required() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample(SampleRecords::FLAT_INCOMPLETE);
    let result = world.run(&["show", SampleRecords::FLAT_INCOMPLETE])?;
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.contains("Property Dimensions"));
    assert!(stdout.contains("Not provided"));
    assert!(!stdout.contains("Washrooms"));
    assert!(stdout.contains("/images/property-placeholder.svg"));
    Ok(())
}

#[test]
fn test_image_url_and_srcset() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let url = "https://ik.imagekit.io/acme/a.jpg";

    let result = world.run(&["image", url, "--image-format", "jpg", "--quality", "85"])?;
    assert!(result.success());
    assert_eq!(
        result.stdout().trim(),
        "https://ik.imagekit.io/acme/tr:q-85,f-jpg/a.jpg"
    );

    let result = world.run(&["image", url, "--srcset"])?;
    assert!(result.success());
    let srcset = result.stdout().trim().to_string();
    assert_eq!(srcset.split(", ").count(), 4);
    assert!(srcset.ends_with("tr:w-1920,q-80,f-webp/a.jpg 1920w"));
    Ok(())
}

#[test]
fn test_image_unrecognized_url_unchanged() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let url = "/uploads/My House.png";
    let result = world.run(&["--format", "json", "image", url, "--width", "640"])?;
    assert!(result.success());

    let json = result.json()?;
    assert_eq!(json["recognized"], false);
    assert_eq!(json["url"], url);
    Ok(())
}

#[test]
fn test_config_switches_host_strategy() -> anyhow::Result<()> {
    let world = TestWorld::new().with_config(
        "[image.host]\nkind = \"query-param\"\npattern = \"imgix.net\"\n",
    );
    let result = world.run(&["image", "https://acme.imgix.net/a.jpg", "--width", "640"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout().trim(),
        "https://acme.imgix.net/a.jpg?w=640&q=80&fm=webp"
    );
    Ok(())
}

#[test]
fn test_invalid_config_is_reported() -> anyhow::Result<()> {
    let world = TestWorld::new().with_config("[image]\nbreakpoints = []\n");
    let result = world.run(&["categories"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Error:"));
    assert!(result.stderr().contains("breakpoints"));
    Ok(())
}

#[test]
fn test_resolve_listing_without_images() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample(SampleRecords::LAND_FOR_SALE);
    let result = world.run(&["--format", "json", "resolve", SampleRecords::LAND_FOR_SALE])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    assert_eq!(json["state"], "empty");
    assert_eq!(json["attempts"], 0);
    assert_eq!(json["display_url"], "/images/property-placeholder.svg");
    assert!(json["sources"].is_null());
    Ok(())
}
