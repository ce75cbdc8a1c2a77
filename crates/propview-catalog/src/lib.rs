//! Compiled-in listing configuration.
//!
//! The category registry and the field visibility matrix are immutable
//! tables; adding a category is a code change to both, never a data migration.

pub mod amenities;
pub mod matrix;
pub mod registry;

pub use matrix::{FieldRule, matrix_categories, rules_for, visibility_of};
pub use registry::{
    CategorySpec, amenity_vocabulary_of, category_label, find_category, get_all_categories,
    is_registered, list_categories, listing_type_of,
};
