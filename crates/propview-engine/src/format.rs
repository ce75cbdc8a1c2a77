use propview_catalog::listing_type_of;
use propview_types::{FieldName, FieldValue, ListingType};

use crate::display::DisplayField;

/// Shown in place of a required field the poster left empty
pub const NOT_PROVIDED: &str = "Not provided";

const FURNISHING: &[(&str, &str)] = &[
    ("furnished", "Furnished"),
    ("semi", "Semi Furnished"),
    ("unfurnished", "Unfurnished"),
];

const CONSTRUCTION: &[(&str, &str)] = &[
    ("ready", "Ready to Move"),
    ("under-construction", "Under Construction"),
    ("new-launch", "New Launch"),
];

const POSSESSION: &[(&str, &str)] = &[
    ("immediate", "Immediate"),
    ("within-3-months", "Within 3 Months"),
    ("within-6-months", "Within 6 Months"),
    ("within-1-year", "Within 1 Year"),
];

const OCCUPANCY: &[(&str, &str)] = &[
    ("single", "Single Sharing"),
    ("double", "Double Sharing"),
    ("triple", "Triple Sharing"),
    ("four", "Four Sharing"),
];

const LAND_TYPE: &[(&str, &str)] = &[
    ("plot", "Residential Plot"),
    ("agricultural", "Agricultural Land"),
    ("commercial", "Commercial Land"),
    ("industrial", "Industrial Land"),
    ("farmhouse", "Farm House Land"),
];

const PROPERTY_AGE: &[(&str, &str)] = &[
    ("new", "New Construction"),
    ("0-1", "Less than 1 Year"),
    ("1-5", "1-5 Years"),
    ("5-10", "5-10 Years"),
    ("10+", "More than 10 Years"),
];

const PARKING: &[(&str, &str)] = &[
    ("none", "No Parking"),
    ("open", "Open Parking"),
    ("covered", "Covered Parking"),
    ("both", "Open & Covered Parking"),
];

const AREA_UNITS: &[(&str, &str)] = &[
    ("sqft", "sq.ft"),
    ("sqm", "sq.m"),
    ("sqyd", "sq.yd"),
    ("acre", "acres"),
    ("cent", "cents"),
    ("guntha", "guntha"),
];

/// Human label for a field, used by form inputs and detail rows
pub fn field_label(field: FieldName) -> &'static str {
    match field {
        FieldName::Price => "Price",
        FieldName::AreaUnit => "Area Unit",
        FieldName::Bedrooms => "Bedrooms",
        FieldName::Bathrooms => "Bathrooms",
        FieldName::Balconies => "Balconies",
        FieldName::Washrooms => "Washrooms",
        FieldName::Area => "Area",
        FieldName::AreaAcres => "Area (Acres)",
        FieldName::Floor => "Floor",
        FieldName::TotalFloors => "Total Floors",
        FieldName::Facing => "Facing",
        FieldName::FurnishingStatus => "Furnishing Status",
        FieldName::ConstructionStatus => "Construction Status",
        FieldName::PropertyAge => "Property Age",
        FieldName::PossessionStatus => "Possession Status",
        FieldName::Occupancy => "Occupancy",
        FieldName::FoodIncluded => "Food Included",
        FieldName::Parking => "Parking",
        FieldName::LandType => "Land Type",
        FieldName::LandFacing => "Land Facing",
        FieldName::RoadAccess => "Road Access",
        FieldName::LegalClearances => "Legal Clearances",
        FieldName::AttachedBathroom => "Attached Bathroom",
        FieldName::NoticePeriod => "Notice Period",
        FieldName::GateClosingTime => "Gate Closing Time",
        FieldName::Amenities => "Amenities",
    }
}

/// Label for the price input, by the category's listing type
pub fn price_label(category: &str) -> &'static str {
    match listing_type_of(category) {
        Some(ListingType::Rent) => "Monthly Rent",
        Some(ListingType::Lease) => "Lease Amount",
        Some(ListingType::Sale) | None => "Price",
    }
}

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, label)| *label)
}

fn code_label(table: &[(&str, &'static str)], value: &FieldValue) -> String {
    value
        .as_text()
        .and_then(|code| lookup(table, code))
        .map_or_else(|| value.to_string(), str::to_string)
}

fn yes_no(value: &FieldValue) -> String {
    match value.as_flag() {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => value.to_string(),
    }
}

/// "north-east" → "North-East"
fn compass(value: &FieldValue) -> String {
    let Some(code) = value.as_text() else {
        return value.to_string();
    };
    code.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Up to `places` decimals, trailing zeros dropped
fn trim_decimal(value: f64, places: usize) -> String {
    let text = format!("{:.*}", places, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rupee amount in the notation listings use: crores, lakhs, else grouped digits.
pub fn format_price(amount: f64) -> String {
    if !amount.is_finite() || amount < 0.0 {
        return amount.to_string();
    }
    // Unit is chosen on the rounded figure
    let rupees = amount.round();
    if rupees < 100_000.0 {
        return format!("₹{}", group_thousands(rupees as u64));
    }
    let lakhs = round_to(amount / 100_000.0, 2);
    if lakhs < 100.0 {
        return format!("₹{} L", trim_decimal(lakhs, 2));
    }
    format!("₹{} Cr", trim_decimal(round_to(amount / 10_000_000.0, 2), 2))
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Display label of an area unit code; unknown codes pass through
pub fn area_unit_label(unit: &str) -> &str {
    lookup(AREA_UNITS, unit).unwrap_or(unit)
}

fn format_area(value: &FieldValue, area_unit: Option<&str>) -> String {
    match value.as_number() {
        Some(n) => format!(
            "{} {}",
            trim_decimal(n, 2),
            area_unit_label(area_unit.unwrap_or("sqft"))
        ),
        None => value.to_string(),
    }
}

fn format_acres(value: &FieldValue) -> String {
    match value.as_number() {
        Some(n) if n == 1.0 => "1 Acre".to_string(),
        Some(n) => format!("{} Acres", trim_decimal(n, 2)),
        None => value.to_string(),
    }
}

fn format_floor(value: &FieldValue) -> String {
    match value.as_number() {
        Some(n) if n == 0.0 => "Ground".to_string(),
        Some(n) if n < 0.0 => "Basement".to_string(),
        _ => value.to_string(),
    }
}

fn format_days(value: &FieldValue) -> String {
    match value.as_number() {
        Some(n) if n == 1.0 => "1 Day".to_string(),
        Some(n) => format!("{} Days", trim_decimal(n, 0)),
        None => value.to_string(),
    }
}

/// Translate a stored value into its human-readable form.
///
/// Fields without a formatter, or values of an unexpected shape, fall back
/// to the raw value's string form.
pub fn format_value(field: FieldName, value: &FieldValue, area_unit: Option<&str>) -> String {
    match field {
        FieldName::Price => value
            .as_number()
            .map_or_else(|| value.to_string(), format_price),
        FieldName::AreaUnit => value
            .as_text()
            .map_or_else(|| value.to_string(), |unit| area_unit_label(unit).to_string()),
        FieldName::Area => format_area(value, area_unit),
        FieldName::AreaAcres => format_acres(value),
        FieldName::Floor => format_floor(value),
        FieldName::Facing | FieldName::LandFacing => compass(value),
        FieldName::FurnishingStatus => code_label(FURNISHING, value),
        FieldName::ConstructionStatus => code_label(CONSTRUCTION, value),
        FieldName::PossessionStatus => code_label(POSSESSION, value),
        FieldName::PropertyAge => code_label(PROPERTY_AGE, value),
        FieldName::Occupancy => code_label(OCCUPANCY, value),
        FieldName::LandType => code_label(LAND_TYPE, value),
        FieldName::Parking => code_label(PARKING, value),
        FieldName::FoodIncluded
        | FieldName::RoadAccess
        | FieldName::LegalClearances
        | FieldName::AttachedBathroom => yes_no(value),
        FieldName::NoticePeriod => format_days(value),
        _ => value.to_string(),
    }
}

/// Rendered text for a display entry; required-but-empty fields read "Not provided"
pub fn display_text(entry: &DisplayField, area_unit: Option<&str>) -> String {
    match &entry.value {
        Some(value) => format_value(entry.field, value, area_unit),
        None => NOT_PROVIDED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerated_codes() {
        assert_eq!(
            format_value(FieldName::FurnishingStatus, &"semi".into(), None),
            "Semi Furnished"
        );
        assert_eq!(
            format_value(FieldName::Occupancy, &"double".into(), None),
            "Double Sharing"
        );
        assert_eq!(
            format_value(FieldName::ConstructionStatus, &"under-construction".into(), None),
            "Under Construction"
        );
    }

    #[test]
    fn test_unknown_code_passes_through() {
        assert_eq!(
            format_value(FieldName::FurnishingStatus, &"bare-shell".into(), None),
            "bare-shell"
        );
        assert_eq!(format_value(FieldName::Bedrooms, &FieldValue::Number(3.0), None), "3");
        assert_eq!(format_value(FieldName::Washrooms, &FieldValue::Flag(true), None), "true");
    }

    #[test]
    fn test_flags() {
        assert_eq!(format_value(FieldName::FoodIncluded, &true.into(), None), "Yes");
        assert_eq!(format_value(FieldName::FoodIncluded, &false.into(), None), "No");
    }

    #[test]
    fn test_area_with_units() {
        let area = FieldValue::Number(1150.0);
        assert_eq!(format_value(FieldName::Area, &area, None), "1150 sq.ft");
        assert_eq!(format_value(FieldName::Area, &area, Some("sqm")), "1150 sq.m");
        assert_eq!(format_value(FieldName::Area, &area, Some("bigha")), "1150 bigha");
        assert_eq!(format_value(FieldName::AreaAcres, &2.5.into(), None), "2.5 Acres");
        assert_eq!(format_value(FieldName::AreaAcres, &1.0.into(), None), "1 Acre");
    }

    #[test]
    fn test_floors() {
        assert_eq!(format_value(FieldName::Floor, &0.into(), None), "Ground");
        assert_eq!(format_value(FieldName::Floor, &(-1).into(), None), "Basement");
        assert_eq!(format_value(FieldName::Floor, &7.into(), None), "7");
    }

    #[test]
    fn test_compass_labels() {
        assert_eq!(format_value(FieldName::Facing, &"north-east".into(), None), "North-East");
        assert_eq!(format_value(FieldName::LandFacing, &"west".into(), None), "West");
    }

    #[test]
    fn test_prices() {
        assert_eq!(format_price(12_000.0), "₹12,000");
        assert_eq!(format_price(950.0), "₹950");
        assert_eq!(format_price(4_550_000.0), "₹45.5 L");
        assert_eq!(format_price(12_500_000.0), "₹1.25 Cr");
        assert_eq!(format_price(10_000_000.0), "₹1 Cr");
    }

    #[test]
    fn test_price_rounds_before_choosing_unit() {
        assert_eq!(format_price(99_999.4), "₹99,999");
        assert_eq!(format_price(99_999.6), "₹1 L");
        assert_eq!(format_price(9_999_999.0), "₹1 Cr");
        assert_eq!(format_price(9_994_000.0), "₹99.94 L");
    }

    #[test]
    fn test_price_label_by_listing_type() {
        assert_eq!(price_label("flat-for-sale"), "Price");
        assert_eq!(price_label("pg-boys"), "Monthly Rent");
        assert_eq!(price_label("office-for-rent-lease"), "Lease Amount");
        assert_eq!(price_label("unknown"), "Price");
    }

    #[test]
    fn test_notice_period_days() {
        assert_eq!(format_value(FieldName::NoticePeriod, &30.into(), None), "30 Days");
        assert_eq!(format_value(FieldName::NoticePeriod, &1.into(), None), "1 Day");
    }
}
