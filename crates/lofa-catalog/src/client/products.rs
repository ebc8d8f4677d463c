//! Product endpoints for `WooCommerceClient`.

use crate::error::CatalogError;
use crate::pagination::PaginationResult;
use crate::query::{parse_category_id, ProductPreset, ProductQuery};
use crate::types::RawProduct;

use super::WooCommerceClient;

impl WooCommerceClient {
    /// Fetches one page of published products matching `query`.
    ///
    /// A slug in `query.category` is resolved to its numeric id through
    /// [`Self::try_list_categories`] first; a numeric id is used as-is and
    /// triggers no category request. An unknown slug yields an empty result
    /// (with a warning), not an error.
    ///
    /// Records whose `status` is anything other than `"publish"` are dropped
    /// even though the request already filters on `status=publish`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the category lookup or the product request.
    pub async fn try_list_products(
        &self,
        query: &ProductQuery,
    ) -> Result<PaginationResult<RawProduct>, CatalogError> {
        let category_id = match query.category_filter() {
            None => None,
            Some(category) => match parse_category_id(category) {
                Some(id) => Some(id),
                None => {
                    let categories = self.try_list_categories().await?;
                    match find_category_id(&categories, category) {
                        Some(id) => Some(id),
                        None => {
                            tracing::warn!(category, "category slug not found; returning no products");
                            return Ok(PaginationResult::empty());
                        }
                    }
                }
            },
        };

        let url = self.endpoint_url("products", &query.to_params(category_id))?;
        let (products, headers) = self.get_json::<Vec<RawProduct>>(url).await?;
        let products = published_only(products);

        Ok(PaginationResult::from_headers(products, &headers))
    }

    /// Like [`Self::try_list_products`], but any failure is logged and
    /// returned as an empty result.
    pub async fn list_products(&self, query: &ProductQuery) -> PaginationResult<RawProduct> {
        self.try_list_products(query).await.unwrap_or_else(|e| {
            tracing::error!(
                error = %e,
                category = query.category.as_deref(),
                page = query.page,
                "failed to fetch products from catalog"
            );
            PaginationResult::empty()
        })
    }

    /// Fetches a preset listing (featured, on sale, latest, best selling)
    /// of at most `limit` products. Failures degrade to an empty result.
    pub async fn preset_products(
        &self,
        preset: ProductPreset,
        limit: u32,
    ) -> PaginationResult<RawProduct> {
        self.list_products(&preset.query(limit)).await
    }

    pub async fn featured_products(&self, limit: u32) -> PaginationResult<RawProduct> {
        self.preset_products(ProductPreset::Featured, limit).await
    }

    pub async fn on_sale_products(&self, limit: u32) -> PaginationResult<RawProduct> {
        self.preset_products(ProductPreset::OnSale, limit).await
    }

    pub async fn latest_products(&self, limit: u32) -> PaginationResult<RawProduct> {
        self.preset_products(ProductPreset::Latest, limit).await
    }

    pub async fn best_selling_products(&self, limit: u32) -> PaginationResult<RawProduct> {
        self.preset_products(ProductPreset::BestSelling, limit).await
    }

    /// Fetches a single product by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the store has no such product or
    /// the product is not published, otherwise any request error.
    pub async fn try_get_product(&self, id: u64) -> Result<RawProduct, CatalogError> {
        let url = self.endpoint_url(&format!("products/{id}"), &[])?;
        let (product, _) = self.get_json::<RawProduct>(url.clone()).await?;

        if !product.is_published() {
            tracing::debug!(product_id = id, status = ?product.status, "hiding unpublished product");
            return Err(CatalogError::NotFound {
                url: super::redact_url(&url),
            });
        }

        Ok(product)
    }

    /// Like [`Self::try_get_product`], but returns `None` on any failure.
    /// Missing products are logged at debug level, other failures as errors.
    pub async fn get_product(&self, id: u64) -> Option<RawProduct> {
        match self.try_get_product(id).await {
            Ok(product) => Some(product),
            Err(CatalogError::NotFound { .. }) => {
                tracing::debug!(product_id = id, "product not found in catalog");
                None
            }
            Err(e) => {
                tracing::error!(error = %e, product_id = id, "failed to fetch product from catalog");
                None
            }
        }
    }

    /// Full-text product search, delegated entirely to the store.
    ///
    /// # Errors
    ///
    /// Propagates any error from the product request.
    pub async fn try_search_products(
        &self,
        search: &str,
        limit: u32,
    ) -> Result<PaginationResult<RawProduct>, CatalogError> {
        let params = [
            ("search", search.to_owned()),
            ("per_page", limit.to_string()),
            ("status", "publish".to_owned()),
        ];
        let url = self.endpoint_url("products", &params)?;
        let (products, headers) = self.get_json::<Vec<RawProduct>>(url).await?;

        Ok(PaginationResult::from_headers(
            published_only(products),
            &headers,
        ))
    }

    /// Like [`Self::try_search_products`], but failures degrade to an empty
    /// result.
    pub async fn search_products(&self, search: &str, limit: u32) -> PaginationResult<RawProduct> {
        self.try_search_products(search, limit)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "failed to search products in catalog");
                PaginationResult::empty()
            })
    }
}

/// Returns the id of the category whose slug equals `slug` exactly.
pub(super) fn find_category_id(categories: &[crate::types::RawCategory], slug: &str) -> Option<u64> {
    categories.iter().find(|c| c.slug == slug).map(|c| c.id)
}

fn published_only(products: Vec<RawProduct>) -> Vec<RawProduct> {
    products
        .into_iter()
        .filter(|p| {
            let keep = p.is_published();
            if !keep {
                tracing::debug!(product_id = p.id, status = ?p.status, "dropping unpublished product");
            }
            keep
        })
        .collect()
}
