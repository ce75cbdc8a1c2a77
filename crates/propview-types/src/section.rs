use serde::{Deserialize, Serialize};
use std::fmt;

/// Named grouping of related fields in the listing detail and editor views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySection {
    Dimensions,
    Features,
    Land,
    Pg,
    Amenities,
}

impl DisplaySection {
    pub const ALL: [DisplaySection; 5] = [
        DisplaySection::Dimensions,
        DisplaySection::Features,
        DisplaySection::Land,
        DisplaySection::Pg,
        DisplaySection::Amenities,
    ];

    /// Heading shown above the section
    pub fn title(&self) -> &'static str {
        match self {
            DisplaySection::Dimensions => "Property Dimensions",
            DisplaySection::Features => "Features",
            DisplaySection::Land => "Land Details",
            DisplaySection::Pg => "PG Details",
            DisplaySection::Amenities => "Amenities",
        }
    }
}

impl fmt::Display for DisplaySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplaySection::Dimensions => write!(f, "dimensions"),
            DisplaySection::Features => write!(f, "features"),
            DisplaySection::Land => write!(f, "land"),
            DisplaySection::Pg => write!(f, "pg"),
            DisplaySection::Amenities => write!(f, "amenities"),
        }
    }
}
