//! Category endpoints for `WooCommerceClient`.

use crate::error::CatalogError;
use crate::types::RawCategory;

use super::WooCommerceClient;

/// Category page size. The store has far fewer categories than this, so a
/// single page is the full list.
const CATEGORY_PAGE_SIZE: u32 = 100;

impl WooCommerceClient {
    /// Fetches all non-empty categories, ordered by name.
    ///
    /// # Errors
    ///
    /// Propagates any request or decoding error.
    pub async fn try_list_categories(&self) -> Result<Vec<RawCategory>, CatalogError> {
        let params = [
            ("per_page", CATEGORY_PAGE_SIZE.to_string()),
            ("hide_empty", "true".to_owned()),
            ("orderby", "name".to_owned()),
            ("order", "asc".to_owned()),
        ];
        let url = self.endpoint_url("products/categories", &params)?;
        let (categories, _) = self.get_json::<Vec<RawCategory>>(url).await?;
        Ok(categories)
    }

    /// Like [`Self::try_list_categories`], but failures are logged and
    /// returned as an empty list.
    pub async fn list_categories(&self) -> Vec<RawCategory> {
        self.try_list_categories().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to fetch categories from catalog");
            Vec::new()
        })
    }
}
