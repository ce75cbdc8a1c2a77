//! Amenity vocabularies offered by the editor, per family of categories.
//!
//! Advisory only: stored amenities are never filtered against these lists.

pub const RESIDENTIAL: &[&str] = &[
    "Lift",
    "Power Backup",
    "Covered Parking",
    "Security",
    "CCTV",
    "Gym",
    "Swimming Pool",
    "Club House",
    "Children's Play Area",
    "Park",
    "Intercom",
    "Rain Water Harvesting",
    "Gas Pipeline",
    "Maintenance Staff",
];

pub const COMMERCIAL: &[&str] = &[
    "Lift",
    "Power Backup",
    "Visitor Parking",
    "Security",
    "CCTV",
    "Fire Safety",
    "Central Air Conditioning",
    "Cafeteria",
    "Conference Room",
    "Reception",
    "High Speed Internet",
];

pub const PG: &[&str] = &[
    "Wi-Fi",
    "Laundry",
    "Housekeeping",
    "Power Backup",
    "Security",
    "CCTV",
    "Geyser",
    "Air Conditioning",
    "Refrigerator",
    "Study Table",
    "Wardrobe",
    "Common TV",
    "Drinking Water",
];

pub const LAND: &[&str] = &[
    "Boundary Wall",
    "Gated Community",
    "Water Connection",
    "Electricity Connection",
    "Corner Plot",
    "Street Lights",
];
