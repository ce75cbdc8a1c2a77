use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Category, Error, FieldName, FieldSource, FieldValue, Result};

/// Image attached to a listing, as stored in the document database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub url: String,
    /// Display position chosen by the poster (lower first).
    #[serde(default)]
    pub order: i32,
}

impl ImageDescriptor {
    pub fn new(url: impl Into<String>, order: i32) -> Self {
        Self {
            url: url.into(),
            order,
        }
    }
}

/// Persisted property listing.
///
/// Every category-dependent attribute is optional: presence is meaningful and
/// whether the attribute is shown is derived from the category on each read.
/// Unknown keys in the stored document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_unit: Option<String>,

    // --- Dimensions ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balconies: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub washrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_acres: Option<f64>,
    /// 0 is the ground floor, negative numbers are basements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_floors: Option<u32>,

    // --- Features ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnishing_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possession_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_included: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking: Option<String>,

    // --- Land ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_facing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road_access: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_clearances: Option<bool>,

    // --- PG / hostel ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_bathroom: Option<bool>,
    /// Days of notice a tenant must give before vacating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_closing_time: Option<String>,

    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<ImageDescriptor>,
}

impl PropertyRecord {
    pub fn new(category: impl Into<Category>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    /// Parse a stored document, rejecting records without a category.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let record: PropertyRecord = serde_json::from_str(json)?;
        record.check()
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let record: PropertyRecord = serde_json::from_value(value)?;
        record.check()
    }

    fn check(self) -> Result<Self> {
        if self.category.as_str().trim().is_empty() {
            return Err(Error::InvalidRecord("category must not be empty".to_string()));
        }
        Ok(self)
    }
}

fn text(value: &Option<String>) -> Option<FieldValue> {
    value.as_ref().map(|s| FieldValue::Text(s.clone()))
}

impl FieldSource for PropertyRecord {
    fn field_value(&self, field: FieldName) -> Option<FieldValue> {
        match field {
            FieldName::Price => self.price.map(FieldValue::Number),
            FieldName::AreaUnit => text(&self.area_unit),
            FieldName::Bedrooms => self.bedrooms.map(FieldValue::from),
            FieldName::Bathrooms => self.bathrooms.map(FieldValue::from),
            FieldName::Balconies => self.balconies.map(FieldValue::from),
            FieldName::Washrooms => self.washrooms.map(FieldValue::from),
            FieldName::Area => self.area.map(FieldValue::Number),
            FieldName::AreaAcres => self.area_acres.map(FieldValue::Number),
            FieldName::Floor => self.floor.map(FieldValue::from),
            FieldName::TotalFloors => self.total_floors.map(FieldValue::from),
            FieldName::Facing => text(&self.facing),
            FieldName::FurnishingStatus => text(&self.furnishing_status),
            FieldName::ConstructionStatus => text(&self.construction_status),
            FieldName::PropertyAge => text(&self.property_age),
            FieldName::PossessionStatus => text(&self.possession_status),
            FieldName::Occupancy => text(&self.occupancy),
            FieldName::FoodIncluded => self.food_included.map(FieldValue::Flag),
            FieldName::Parking => text(&self.parking),
            FieldName::LandType => text(&self.land_type),
            FieldName::LandFacing => text(&self.land_facing),
            FieldName::RoadAccess => self.road_access.map(FieldValue::Flag),
            FieldName::LegalClearances => self.legal_clearances.map(FieldValue::Flag),
            FieldName::AttachedBathroom => self.attached_bathroom.map(FieldValue::Flag),
            FieldName::NoticePeriod => self.notice_period.map(FieldValue::from),
            FieldName::GateClosingTime => text(&self.gate_closing_time),
            // Amenities are a list; they are surfaced through their own section.
            FieldName::Amenities => {
                if self.amenities.is_empty() {
                    None
                } else {
                    Some(FieldValue::Text(self.amenities.join(", ")))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pg_record() {
        let json = r#"{
            "title": "Boys PG near campus",
            "category": "pg-boys",
            "occupancy": "double",
            "foodIncluded": false,
            "bedrooms": 3,
            "images": [{"url": "https://example.com/a.jpg", "order": 1}],
            "postedBy": "ignored-unknown-key"
        }"#;

        let record = PropertyRecord::from_json_str(json).unwrap();
        assert_eq!(record.category.as_str(), "pg-boys");
        assert_eq!(record.food_included, Some(false));
        assert_eq!(record.bedrooms, Some(3));
        assert_eq!(record.images.len(), 1);
        assert!(record.amenities.is_empty());
    }

    #[test]
    fn test_empty_category_rejected() {
        let err = PropertyRecord::from_json_str(r#"{"category": "  "}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[test]
    fn test_missing_category_is_json_error() {
        let err = PropertyRecord::from_json_str(r#"{"title": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_field_value_bridges_typed_fields() {
        let mut record = PropertyRecord::new("flat-for-sale");
        record.floor = Some(0);
        record.furnishing_status = Some("semi".to_string());

        assert_eq!(record.field_value(FieldName::Floor), Some(FieldValue::Number(0.0)));
        assert_eq!(
            record.field_value(FieldName::FurnishingStatus),
            Some(FieldValue::Text("semi".to_string()))
        );
        assert_eq!(record.field_value(FieldName::Bedrooms), None);
        assert!(record.has_value(FieldName::Floor));
    }

    #[test]
    fn test_amenities_field_value() {
        let mut record = PropertyRecord::new("flat-for-rent");
        assert_eq!(record.field_value(FieldName::Amenities), None);

        record.amenities = vec!["Lift".to_string(), "Power Backup".to_string()];
        assert_eq!(
            record.field_value(FieldName::Amenities),
            Some(FieldValue::Text("Lift, Power Backup".to_string()))
        );
    }
}
