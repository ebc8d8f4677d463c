use axum::{extract::State, Json};
use lofa_catalog::normalize_category;
use lofa_core::NormalizedCategory;
use serde::Serialize;

use super::AppState;

#[derive(Debug, Serialize)]
pub(super) struct CategoriesResponse {
    categories: Vec<NormalizedCategory>,
}

pub(super) async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let categories = state
        .catalog
        .list_categories()
        .await
        .into_iter()
        .map(normalize_category)
        .collect();

    Json(CategoriesResponse { categories })
}
