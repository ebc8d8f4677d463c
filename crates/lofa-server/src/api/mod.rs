mod categories;
mod products;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use lofa_catalog::{query::MAX_PER_PAGE, WooCommerceClient};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<WooCommerceClient>,
}

/// Error response: `{ "error": "<message>" }` with the given status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

/// Clamps a requested page size to `1..=100`, or `default` when absent.
pub(super) fn clamp_per_page(requested: Option<i64>, default: u32) -> u32 {
    requested.map_or(default, |n| {
        u32::try_from(n.clamp(1, i64::from(MAX_PER_PAGE))).unwrap_or(MAX_PER_PAGE)
    })
}

/// Clamps a requested page number to `>= 1`, or `1` when absent.
pub(super) fn clamp_page(requested: Option<i64>) -> u32 {
    requested.map_or(1, |n| {
        u32::try_from(n.clamp(1, i64::from(u32::MAX))).unwrap_or(u32::MAX)
    })
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

fn catalog_router() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(categories::list_categories))
        .route("/api/products", get(products::list_products))
        .route("/api/products/featured", get(products::featured_products))
        .route("/api/products/on-sale", get(products::on_sale_products))
        .route("/api/products/latest", get(products::latest_products))
        .route(
            "/api/products/best-selling",
            get(products::best_selling_products),
        )
        .route("/api/products/search", get(products::search_products))
        .route("/api/products/{id}", get(products::get_product))
}

pub fn build_app(state: AppState) -> Router {
    let public_routes = Router::new().route("/api/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(catalog_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthData { status: "ok" }))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
