pub mod category;
pub mod error;
pub mod field;
pub mod record;
pub mod section;

pub use category::{Category, ListingType};
pub use error::{Error, Result};
pub use field::{FieldName, FieldSource, FieldValue, FieldVisibility};
pub use record::{ImageDescriptor, PropertyRecord};
pub use section::DisplaySection;
