use propview_engine::{DetailView, FormSection};
use propview_runtime::{ImageSources, ImageState};
use propview_types::{FieldName, ListingType};
use serde::Serialize;

// --------------------------------------------------------
// Catalog
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CategoryEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub listing_type: ListingType,
    pub amenities: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesViewModel {
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct FieldsViewModel {
    pub category: String,
    pub registered: bool,
    pub price_label: &'static str,
    pub sections: Vec<FormSection>,
    pub amenities: Vec<&'static str>,
}

// --------------------------------------------------------
// Records
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ValidationViewModel {
    pub file: String,
    pub title: String,
    pub category: String,
    pub valid: bool,
    pub missing: Vec<FieldName>,
}

/// URL variants derived for the primary image, without touching the network
#[derive(Debug, Serialize)]
pub struct ImageVariants {
    pub original: String,
    pub preload_url: String,
    pub fallback_url: String,
    pub srcset: String,
}

#[derive(Debug, Serialize)]
pub struct ShowViewModel {
    #[serde(flatten)]
    pub detail: DetailView,
    pub image: Option<ImageVariants>,
    pub placeholder_url: String,
}

// --------------------------------------------------------
// Images
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ImageUrlViewModel {
    pub input: String,
    pub host: &'static str,
    pub recognized: bool,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srcset: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResolveViewModel {
    pub title: String,
    pub state: ImageState,
    pub attempts: u32,
    pub display_url: Option<String>,
    pub sources: Option<ImageSources>,
}
