use serde::{Deserialize, Serialize};

/// A storefront product, normalized from the catalog API into the shape the
/// UI consumes. Serialized with camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProduct {
    /// Vendor numeric product id rendered as a decimal string, e.g. `"1042"`.
    pub id: String,
    pub name: String,
    /// URL slug, e.g. `"pulsera-luna"`.
    pub slug: String,
    /// Raw HTML description, passed through unchanged.
    pub description: String,
    pub short_description: String,
    /// Current selling price.
    pub price: f64,
    pub regular_price: f64,
    /// `None` when the vendor reports no active sale.
    pub sale_price: Option<f64>,
    /// Images in vendor order; the first one is flagged primary.
    pub images: Vec<NormalizedImage>,
    pub categories: Vec<NormalizedCategoryRef>,
    /// Units in stock, `0` when the vendor does not track quantity.
    pub stock: i64,
    /// Vendor stock status: `"instock"`, `"outofstock"`, or `"onbackorder"`.
    pub stock_status: String,
    /// Average review rating, `0.0` when there are no reviews.
    pub rating: f64,
    pub rating_count: u64,
    pub total_sales: u64,
    pub is_featured: bool,
    pub is_on_sale: bool,
    /// ISO 8601 creation timestamp as reported by the vendor.
    pub created_at: String,
    pub updated_at: String,
}

impl NormalizedProduct {
    /// Returns the primary image, if the product has any images.
    #[must_use]
    pub fn primary_image(&self) -> Option<&NormalizedImage> {
        self.images.iter().find(|img| img.is_primary)
    }

    /// Price a shopper pays right now: the sale price when one is set,
    /// otherwise the regular selling price.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }

    /// Returns `true` if the vendor reports the product as purchasable.
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        self.stock_status != "outofstock"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedImage {
    pub id: String,
    pub url: String,
    pub alt: String,
    pub is_primary: bool,
}

/// A category reference embedded in a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedCategoryRef {
    pub id: String,
    pub name: String,
    pub slug: String,
}
