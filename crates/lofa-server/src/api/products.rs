use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use lofa_catalog::{
    normalize_product,
    query::{DEFAULT_PER_PAGE, DEFAULT_PRESET_LIMIT},
    OrderBy, PaginationResult, ProductPreset, ProductQuery, RawProduct, SortOrder,
};
use lofa_core::NormalizedProduct;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{clamp_page, clamp_per_page, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct ListProductsParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub on_sale: Option<bool>,
    pub orderby: Option<OrderBy>,
    pub order: Option<SortOrder>,
    pub slug: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LimitParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProductListResponse {
    products: Vec<NormalizedProduct>,
    total: u64,
    total_pages: u64,
    current_page: u32,
}

#[derive(Debug, Serialize)]
pub(super) struct PresetResponse {
    products: Vec<NormalizedProduct>,
    total: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SearchResponse {
    products: Vec<NormalizedProduct>,
    total: u64,
    total_pages: u64,
}

#[derive(Debug, Serialize)]
pub(super) struct ProductResponse {
    product: NormalizedProduct,
}

/// Logs a rejected query string and converts it to the route's 500 error.
fn reject_params(req_id: &RequestId, rejection: &QueryRejection, message: &str) -> ApiError {
    tracing::error!(
        request_id = %req_id.0,
        error = %rejection,
        "{message}"
    );
    ApiError::internal(message)
}

fn normalize_page(page: PaginationResult<RawProduct>) -> PaginationResult<NormalizedProduct> {
    page.map(normalize_product)
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    params: Result<Query<ListProductsParams>, QueryRejection>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let Query(params) =
        params.map_err(|e| reject_params(&req_id, &e, "Error fetching products"))?;

    let query = ProductQuery {
        per_page: clamp_per_page(params.per_page, DEFAULT_PER_PAGE),
        page: clamp_page(params.page),
        category: params.category,
        featured: params.featured,
        on_sale: params.on_sale,
        orderby: params.orderby.unwrap_or_default(),
        order: params.order.unwrap_or_default(),
        slug: params.slug,
        search: params.search,
    };

    let page = normalize_page(state.catalog.list_products(&query).await);

    Ok(Json(ProductListResponse {
        products: page.items,
        total: page.total,
        total_pages: page.total_pages,
        current_page: query.page,
    }))
}

async fn preset_listing(
    state: &AppState,
    req_id: &RequestId,
    preset: ProductPreset,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<PresetResponse>, ApiError> {
    let Query(params) = params.map_err(|e| {
        reject_params(
            req_id,
            &e,
            &format!("Error fetching {} products", preset.slug()),
        )
    })?;

    let limit = clamp_per_page(params.limit, DEFAULT_PRESET_LIMIT);
    let page = normalize_page(state.catalog.preset_products(preset, limit).await);

    Ok(Json(PresetResponse {
        products: page.items,
        total: page.total,
    }))
}

pub(super) async fn featured_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<PresetResponse>, ApiError> {
    preset_listing(&state, &req_id, ProductPreset::Featured, params).await
}

pub(super) async fn on_sale_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<PresetResponse>, ApiError> {
    preset_listing(&state, &req_id, ProductPreset::OnSale, params).await
}

pub(super) async fn latest_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<PresetResponse>, ApiError> {
    preset_listing(&state, &req_id, ProductPreset::Latest, params).await
}

pub(super) async fn best_selling_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<PresetResponse>, ApiError> {
    preset_listing(&state, &req_id, ProductPreset::BestSelling, params).await
}

pub(super) async fn search_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) =
        params.map_err(|e| reject_params(&req_id, &e, "Error searching products"))?;

    let search = params.q.trim();
    if search.is_empty() {
        return Ok(Json(SearchResponse {
            products: Vec::new(),
            total: 0,
            total_pages: 0,
        }));
    }

    let limit = clamp_per_page(params.limit, DEFAULT_PER_PAGE);
    let page = normalize_page(state.catalog.search_products(search, limit).await);

    Ok(Json(SearchResponse {
        products: page.items,
        total: page.total,
        total_pages: page.total_pages,
    }))
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    // Product ids are numeric upstream; anything else cannot exist.
    let Ok(id) = id.parse::<u64>() else {
        return Err(ApiError::not_found("Product not found"));
    };

    state
        .catalog
        .get_product(id)
        .await
        .map(|raw| {
            Json(ProductResponse {
                product: normalize_product(raw),
            })
        })
        .ok_or_else(|| ApiError::not_found("Product not found"))
}
