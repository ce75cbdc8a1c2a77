use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Attribute of a property listing whose visibility depends on the category.
///
/// Declaration order is significant: it is the `Ord` order, so sets of field
/// names and validation reports always come out in this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Price,
    AreaUnit,
    // Dimensions
    Bedrooms,
    Bathrooms,
    Balconies,
    Washrooms,
    Area,
    AreaAcres,
    Floor,
    TotalFloors,
    // Features
    Facing,
    FurnishingStatus,
    ConstructionStatus,
    PropertyAge,
    PossessionStatus,
    Occupancy,
    FoodIncluded,
    Parking,
    // Land
    LandType,
    LandFacing,
    RoadAccess,
    LegalClearances,
    // PG / hostel
    AttachedBathroom,
    NoticePeriod,
    GateClosingTime,
    Amenities,
}

impl FieldName {
    pub const ALL: [FieldName; 26] = [
        FieldName::Price,
        FieldName::AreaUnit,
        FieldName::Bedrooms,
        FieldName::Bathrooms,
        FieldName::Balconies,
        FieldName::Washrooms,
        FieldName::Area,
        FieldName::AreaAcres,
        FieldName::Floor,
        FieldName::TotalFloors,
        FieldName::Facing,
        FieldName::FurnishingStatus,
        FieldName::ConstructionStatus,
        FieldName::PropertyAge,
        FieldName::PossessionStatus,
        FieldName::Occupancy,
        FieldName::FoodIncluded,
        FieldName::Parking,
        FieldName::LandType,
        FieldName::LandFacing,
        FieldName::RoadAccess,
        FieldName::LegalClearances,
        FieldName::AttachedBathroom,
        FieldName::NoticePeriod,
        FieldName::GateClosingTime,
        FieldName::Amenities,
    ];

    /// Wire name as stored in the persisted record (camelCase).
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Price => "price",
            FieldName::AreaUnit => "areaUnit",
            FieldName::Bedrooms => "bedrooms",
            FieldName::Bathrooms => "bathrooms",
            FieldName::Balconies => "balconies",
            FieldName::Washrooms => "washrooms",
            FieldName::Area => "area",
            FieldName::AreaAcres => "areaAcres",
            FieldName::Floor => "floor",
            FieldName::TotalFloors => "totalFloors",
            FieldName::Facing => "facing",
            FieldName::FurnishingStatus => "furnishingStatus",
            FieldName::ConstructionStatus => "constructionStatus",
            FieldName::PropertyAge => "propertyAge",
            FieldName::PossessionStatus => "possessionStatus",
            FieldName::Occupancy => "occupancy",
            FieldName::FoodIncluded => "foodIncluded",
            FieldName::Parking => "parking",
            FieldName::LandType => "landType",
            FieldName::LandFacing => "landFacing",
            FieldName::RoadAccess => "roadAccess",
            FieldName::LegalClearances => "legalClearances",
            FieldName::AttachedBathroom => "attachedBathroom",
            FieldName::NoticePeriod => "noticePeriod",
            FieldName::GateClosingTime => "gateClosingTime",
            FieldName::Amenities => "amenities",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown field name: {}", s))
    }
}

/// Obligation of a field for a given category.
///
/// These are independent classes, not a scale: `Hidden` and `Required` are
/// absolute for display, `Optional` depends on whether the record has data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldVisibility {
    Required,
    Optional,
    Hidden,
}

impl fmt::Display for FieldVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldVisibility::Required => write!(f, "required"),
            FieldVisibility::Optional => write!(f, "optional"),
            FieldVisibility::Hidden => write!(f, "hidden"),
        }
    }
}

/// Raw value of a single record attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Blank text is the only present-but-empty value.
    ///
    /// Zero and `false` are real data (ground floor, no balconies, food not
    /// included) and never count as missing.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(_) | FieldValue::Flag(_) => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Flag(flag) => write!(f, "{}", flag),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Anything that can answer "what is the value of field X".
///
/// Implemented by the persisted record and by plain maps, so a half-filled
/// editor draft can be validated without building a full record.
pub trait FieldSource {
    fn field_value(&self, field: FieldName) -> Option<FieldValue>;

    /// Field holds a non-blank value.
    fn has_value(&self, field: FieldName) -> bool {
        self.field_value(field).is_some_and(|value| !value.is_blank())
    }
}

impl FieldSource for BTreeMap<FieldName, FieldValue> {
    fn field_value(&self, field: FieldName) -> Option<FieldValue> {
        self.get(&field).cloned()
    }
}

impl FieldSource for HashMap<FieldName, FieldValue> {
    fn field_value(&self, field: FieldName) -> Option<FieldValue> {
        self.get(&field).cloned()
    }
}
