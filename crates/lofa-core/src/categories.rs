use serde::{Deserialize, Serialize};

/// A product category as exposed to the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Number of published products in the category.
    pub count: u64,
    /// Serialized as `null` when the category has no image.
    pub image: Option<CategoryImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryImage {
    pub id: String,
    pub url: String,
    pub alt: String,
}
