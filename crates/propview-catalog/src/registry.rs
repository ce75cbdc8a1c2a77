use propview_types::{Category, ListingType};

use crate::amenities;

/// Static description of one property category
#[derive(Debug, Clone)]
pub struct CategorySpec {
    pub id: &'static str,
    pub label: &'static str,
    pub listing_type: ListingType,
    pub amenities: &'static [&'static str],
}

impl CategorySpec {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        listing_type: ListingType,
        amenities: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            label,
            listing_type,
            amenities,
        }
    }

    pub fn category(&self) -> Category {
        Category::new(self.id)
    }
}

/// Registry of every category a listing may be posted under, in menu order
const CATEGORIES: &[CategorySpec] = &[
    // Sale
    CategorySpec::new("land-for-sale", "Land for Sale", ListingType::Sale, amenities::LAND),
    CategorySpec::new("flat-for-sale", "Flat for Sale", ListingType::Sale, amenities::RESIDENTIAL),
    CategorySpec::new(
        "house-for-sale",
        "House for Sale",
        ListingType::Sale,
        amenities::RESIDENTIAL,
    ),
    // Rent
    CategorySpec::new(
        "house-for-rent",
        "House for Rent",
        ListingType::Rent,
        amenities::RESIDENTIAL,
    ),
    CategorySpec::new("flat-for-rent", "Flat for Rent", ListingType::Rent, amenities::RESIDENTIAL),
    // Lease
    CategorySpec::new(
        "office-for-rent-lease",
        "Office for Rent / Lease",
        ListingType::Lease,
        amenities::COMMERCIAL,
    ),
    CategorySpec::new(
        "commercial-space-for-rent-lease",
        "Commercial Space for Rent / Lease",
        ListingType::Lease,
        amenities::COMMERCIAL,
    ),
    // PG / hostel
    CategorySpec::new("pg-hostel-boys", "PG / Hostel (Boys)", ListingType::Rent, amenities::PG),
    CategorySpec::new("pg-hostel-girls", "PG / Hostel (Girls)", ListingType::Rent, amenities::PG),
    CategorySpec::new("pg-boys", "PG (Boys)", ListingType::Rent, amenities::PG),
    CategorySpec::new("pg-girls", "PG (Girls)", ListingType::Rent, amenities::PG),
];

pub fn get_all_categories() -> &'static [CategorySpec] {
    CATEGORIES
}

/// Registered categories in menu order
pub fn list_categories() -> Vec<Category> {
    CATEGORIES.iter().map(CategorySpec::category).collect()
}

pub fn find_category(category: &str) -> Option<&'static CategorySpec> {
    CATEGORIES.iter().find(|spec| spec.id == category)
}

pub fn is_registered(category: &str) -> bool {
    find_category(category).is_some()
}

/// Listing type of a registered category; `None` for unknown identifiers
pub fn listing_type_of(category: &str) -> Option<ListingType> {
    find_category(category).map(|spec| spec.listing_type)
}

/// Amenity labels the editor offers for a category.
///
/// Unknown categories get an empty vocabulary so records created under a
/// since-removed category still render.
pub fn amenity_vocabulary_of(category: &str) -> &'static [&'static str] {
    match find_category(category) {
        Some(spec) => spec.amenities,
        None => {
            log::debug!("no amenity vocabulary for unregistered category '{}'", category);
            &[]
        }
    }
}

/// Human label, falling back to the raw identifier
pub fn category_label(category: &str) -> &str {
    find_category(category).map_or(category, |spec| spec.label)
}
