pub mod client;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod query;
pub mod types;

pub use client::{Credentials, WooCommerceClient};
pub use error::CatalogError;
pub use normalize::{normalize_category, normalize_product};
pub use pagination::PaginationResult;
pub use query::{OrderBy, ProductPreset, ProductQuery, SortOrder};
pub use types::{RawCategory, RawCategoryRef, RawImage, RawProduct};
