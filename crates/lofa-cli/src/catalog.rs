//! Catalog command handlers for the CLI.
//!
//! Each handler calls the fallible `try_*` client operation so that an
//! unreachable or misconfigured store fails the command instead of printing
//! an empty listing. Output is the same normalized JSON the HTTP API serves.

use anyhow::Context;
use lofa_catalog::{
    normalize_category, normalize_product, ProductPreset, ProductQuery, WooCommerceClient,
};
use serde_json::{json, Value};

/// One page of products with paging totals.
///
/// # Errors
///
/// Returns an error if the category lookup or product request fails.
pub(crate) async fn run_products(
    client: &WooCommerceClient,
    query: &ProductQuery,
) -> anyhow::Result<Value> {
    let page = client
        .try_list_products(query)
        .await
        .context("failed to list products")?
        .map(normalize_product);

    Ok(json!({
        "products": page.items,
        "total": page.total,
        "totalPages": page.total_pages,
        "currentPage": query.page,
    }))
}

/// A preset listing (featured, on sale, latest, best selling).
///
/// # Errors
///
/// Returns an error if the product request fails.
pub(crate) async fn run_preset(
    client: &WooCommerceClient,
    preset: ProductPreset,
    limit: u32,
) -> anyhow::Result<Value> {
    let page = client
        .try_list_products(&preset.query(limit))
        .await
        .with_context(|| format!("failed to list {} products", preset.slug()))?
        .map(normalize_product);

    Ok(json!({
        "products": page.items,
        "total": page.total,
    }))
}

/// # Errors
///
/// Returns an error if the category request fails.
pub(crate) async fn run_categories(client: &WooCommerceClient) -> anyhow::Result<Value> {
    let categories: Vec<_> = client
        .try_list_categories()
        .await
        .context("failed to list categories")?
        .into_iter()
        .map(normalize_category)
        .collect();

    Ok(json!({ "categories": categories }))
}

/// # Errors
///
/// Returns an error if the product does not exist or the request fails.
pub(crate) async fn run_product(client: &WooCommerceClient, id: u64) -> anyhow::Result<Value> {
    let product = client
        .try_get_product(id)
        .await
        .with_context(|| format!("failed to fetch product {id}"))?;

    Ok(json!({ "product": normalize_product(product) }))
}

/// # Errors
///
/// Returns an error if the search request fails.
pub(crate) async fn run_search(
    client: &WooCommerceClient,
    search: &str,
    limit: u32,
) -> anyhow::Result<Value> {
    let page = client
        .try_search_products(search, limit)
        .await
        .with_context(|| format!("failed to search products for \"{search}\""))?
        .map(normalize_product);

    Ok(json!({
        "products": page.items,
        "total": page.total,
        "totalPages": page.total_pages,
    }))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
