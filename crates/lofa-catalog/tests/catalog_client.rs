//! Integration tests for `WooCommerceClient`.
//!
//! Uses `wiremock` to stand up a local store for each test so no real
//! network traffic is made. Covers the listing contract (header totals,
//! slug resolution, publish filter), the preset listings, and the
//! soft-fail behaviour of every operation.

use serde_json::json;
use wiremock::matchers::{
    basic_auth, header_exists, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lofa_catalog::{
    normalize_product, CatalogError, Credentials, ProductPreset, ProductQuery, WooCommerceClient,
};

const PRODUCTS_PATH: &str = "/wp-json/wc/v3/products";
const CATEGORIES_PATH: &str = "/wp-json/wc/v3/products/categories";

/// Builds a client for tests: 5-second timeout, anonymous.
fn test_client(server: &MockServer) -> WooCommerceClient {
    WooCommerceClient::new(&server.uri(), Credentials::default(), 5, "lofa-test/0.1")
        .expect("failed to build test WooCommerceClient")
}

/// A client pointed at a port nothing listens on.
fn unreachable_client() -> WooCommerceClient {
    WooCommerceClient::new("http://127.0.0.1:1", Credentials::default(), 2, "lofa-test/0.1")
        .expect("failed to build test WooCommerceClient")
}

fn product_json(id: u64, price: &str, regular_price: &str, sale_price: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Producto {id}"),
        "slug": format!("producto-{id}"),
        "status": "publish",
        "description": "",
        "short_description": "",
        "price": price,
        "regular_price": regular_price,
        "sale_price": sale_price,
        "images": [
            { "id": id * 10, "src": format!("https://lofa.store/{id}-a.jpg"), "name": "a", "alt": "" },
            { "id": id * 10 + 1, "src": format!("https://lofa.store/{id}-b.jpg"), "name": "b", "alt": "" }
        ],
        "categories": [{ "id": 15, "name": "Pulseras", "slug": "pulseras" }],
        "stock_status": "instock",
        "stock_quantity": null,
        "average_rating": "0.00",
        "rating_count": 0,
        "total_sales": 3,
        "featured": false,
        "on_sale": !sale_price.is_empty(),
        "date_created": "2024-03-01T10:00:00",
        "date_modified": "2024-03-02T10:00:00"
    })
}

fn categories_json() -> serde_json::Value {
    json!([
        { "id": 15, "name": "Pulseras", "slug": "pulseras", "description": "", "count": 4, "image": null },
        {
            "id": 16, "name": "Collares", "slug": "collares", "description": "", "count": 2,
            "image": { "id": 5, "src": "https://lofa.store/collares.jpg", "name": "collares", "alt": "" }
        }
    ])
}

fn listing(body: &serde_json::Value, total: &str, total_pages: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(body)
        .insert_header("X-WP-Total", total)
        .insert_header("X-WP-TotalPages", total_pages)
}

// ---------------------------------------------------------------------------
// list_products
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_products_reads_totals_from_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("per_page", "20"))
        .and(query_param("page", "1"))
        .and(query_param("orderby", "date"))
        .and(query_param("order", "desc"))
        .and(query_param("status", "publish"))
        .respond_with(listing(
            &json!([product_json(1, "19.99", "19.99", ""), product_json(2, "20.00", "25.00", "20.00")]),
            "2",
            "1",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_client(&server)
        .list_products(&ProductQuery::default())
        .await;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn list_products_end_to_end_normalization() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(listing(
            &json!([product_json(1, "19.99", "19.99", ""), product_json(2, "20.00", "25.00", "20.00")]),
            "2",
            "1",
        ))
        .mount(&server)
        .await;

    let page = test_client(&server)
        .list_products(&ProductQuery::default())
        .await
        .map(normalize_product);

    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
    assert!((page.items[0].price - 19.99).abs() < 1e-9);
    assert_eq!(page.items[0].sale_price, None);
    assert!((page.items[1].regular_price - 25.0).abs() < 1e-9);
    assert_eq!(page.items[1].sale_price, Some(20.0));
    assert!(page.items[1].images[0].is_primary);
    assert!(!page.items[1].images[1].is_primary);
}

#[tokio::test]
async fn list_products_missing_headers_default_to_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([product_json(1, "5", "5", "")])),
        )
        .mount(&server)
        .await;

    let page = test_client(&server)
        .list_products(&ProductQuery::default())
        .await;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn list_products_numeric_category_skips_category_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CATEGORIES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(categories_json()))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("category", "16"))
        .respond_with(listing(&json!([product_json(1, "5", "5", "")]), "1", "1"))
        .expect(1)
        .mount(&server)
        .await;

    let query = ProductQuery {
        category: Some("16".to_owned()),
        ..ProductQuery::default()
    };
    let page = test_client(&server).list_products(&query).await;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn list_products_resolves_category_slug() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CATEGORIES_PATH))
        .and(query_param("per_page", "100"))
        .and(query_param("hide_empty", "true"))
        .and(query_param("orderby", "name"))
        .and(query_param("order", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(categories_json()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("category", "16"))
        .respond_with(listing(&json!([product_json(7, "5", "5", "")]), "1", "1"))
        .expect(1)
        .mount(&server)
        .await;

    let query = ProductQuery {
        category: Some("collares".to_owned()),
        ..ProductQuery::default()
    };
    let page = test_client(&server).list_products(&query).await;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, 7);
}

#[tokio::test]
async fn list_products_unknown_slug_returns_empty_without_querying_products() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CATEGORIES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(categories_json()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(listing(&json!([product_json(1, "5", "5", "")]), "1", "1"))
        .expect(0)
        .mount(&server)
        .await;

    let query = ProductQuery {
        category: Some("bangles".to_owned()),
        ..ProductQuery::default()
    };
    let client = test_client(&server);

    let page = client.list_products(&query).await;
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);

    // Not an error on the fallible path either.
    let page = client
        .try_list_products(&query)
        .await
        .expect("unknown slug should not be an error");
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn list_products_sends_optional_filters_only_when_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("featured", "true"))
        .and(query_param("on_sale", "false"))
        .and(query_param("slug", "producto-1"))
        .and(query_param("orderby", "price"))
        .and(query_param("order", "asc"))
        .and(query_param("per_page", "12"))
        .and(query_param("page", "3"))
        .and(query_param_is_missing("category"))
        .and(query_param_is_missing("search"))
        .respond_with(listing(&json!([]), "0", "0"))
        .expect(1)
        .mount(&server)
        .await;

    let query = ProductQuery {
        per_page: 12,
        page: 3,
        featured: Some(true),
        on_sale: Some(false),
        slug: Some("producto-1".to_owned()),
        orderby: lofa_catalog::OrderBy::Price,
        order: lofa_catalog::SortOrder::Asc,
        ..ProductQuery::default()
    };
    let page = test_client(&server).list_products(&query).await;
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn list_products_drops_unpublished_records() {
    let server = MockServer::start().await;

    let mut draft = product_json(2, "5", "5", "");
    draft["status"] = json!("draft");

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(listing(&json!([product_json(1, "5", "5", ""), draft]), "2", "1"))
        .mount(&server)
        .await;

    let page = test_client(&server)
        .list_products(&ProductQuery::default())
        .await;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, 1);
}

#[tokio::test]
async fn list_products_sends_basic_auth_when_credentials_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(basic_auth("ck_test", "cs_test"))
        .respond_with(listing(&json!([product_json(1, "5", "5", "")]), "1", "1"))
        .expect(1)
        .mount(&server)
        .await;

    let client = WooCommerceClient::new(
        &server.uri(),
        Credentials::new("ck_test", "cs_test"),
        5,
        "lofa-test/0.1",
    )
    .unwrap();

    let page = client.list_products(&ProductQuery::default()).await;
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn list_products_key_without_secret_is_anonymous() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(401))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(listing(&json!([product_json(1, "5", "5", "")]), "1", "1"))
        .expect(1)
        .mount(&server)
        .await;

    let client = WooCommerceClient::new(
        &server.uri(),
        Credentials::new("ck_test", ""),
        5,
        "lofa-test/0.1",
    )
    .unwrap();

    let page = client.list_products(&ProductQuery::default()).await;
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn list_products_tolerates_null_fields_in_one_record() {
    let server = MockServer::start().await;

    let mut sparse = product_json(2, "20.00", "25.00", "");
    sparse["sale_price"] = json!(null);
    sparse["date_created"] = json!(null);
    sparse["description"] = json!(null);

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(listing(
            &json!([product_json(1, "19.99", "19.99", ""), sparse]),
            "2",
            "1",
        ))
        .mount(&server)
        .await;

    let page = test_client(&server)
        .try_list_products(&ProductQuery::default())
        .await
        .expect("a null field should not fail the page")
        .map(normalize_product);

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 2);
    assert_eq!(page.items[1].sale_price, None);
    assert!(page.items[1].created_at.is_empty());
    assert!(page.items[1].description.is_empty());
}

// ---------------------------------------------------------------------------
// presets and search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn featured_preset_sends_fixed_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("featured", "true"))
        .and(query_param("per_page", "8"))
        .and(query_param("orderby", "date"))
        .and(query_param("order", "desc"))
        .respond_with(listing(&json!([product_json(1, "5", "5", "")]), "1", "1"))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_client(&server).featured_products(8).await;
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn on_sale_preset_sends_fixed_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("on_sale", "true"))
        .and(query_param("per_page", "4"))
        .and(query_param_is_missing("featured"))
        .respond_with(listing(&json!([]), "0", "0"))
        .expect(1)
        .mount(&server)
        .await;

    test_client(&server).on_sale_products(4).await;
}

#[tokio::test]
async fn latest_preset_sends_date_ordering_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("orderby", "date"))
        .and(query_param("order", "desc"))
        .and(query_param_is_missing("featured"))
        .and(query_param_is_missing("on_sale"))
        .respond_with(listing(&json!([]), "0", "0"))
        .expect(1)
        .mount(&server)
        .await;

    test_client(&server).latest_products(8).await;
}

#[tokio::test]
async fn best_selling_preset_orders_by_popularity() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("orderby", "popularity"))
        .and(query_param("order", "desc"))
        .respond_with(listing(&json!([product_json(3, "5", "5", "")]), "9", "2"))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_client(&server)
        .preset_products(ProductPreset::BestSelling, 8)
        .await;
    assert_eq!(page.total, 9);
    assert_eq!(page.total_pages, 2);
}

#[tokio::test]
async fn search_passes_query_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("search", "luna plata"))
        .and(query_param("per_page", "20"))
        .and(query_param("status", "publish"))
        .respond_with(listing(&json!([product_json(4, "5", "5", "")]), "1", "1"))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_client(&server).search_products("luna plata", 20).await;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 1);
}

// ---------------------------------------------------------------------------
// get_product and list_categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_product_returns_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{PRODUCTS_PATH}/42")))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(42, "5", "5", "")))
        .mount(&server)
        .await;

    let product = test_client(&server).get_product(42).await;
    assert_eq!(product.map(|p| p.id), Some(42));
}

#[tokio::test]
async fn get_product_missing_is_none_and_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{PRODUCTS_PATH}/404")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "woocommerce_rest_product_invalid_id",
            "message": "Invalid ID.",
            "data": { "status": 404 }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(client.get_product(404).await.is_none());
    let err = client.try_get_product(404).await.unwrap_err();
    assert!(
        matches!(err, CatalogError::NotFound { .. }),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn get_product_hides_drafts() {
    let server = MockServer::start().await;

    let mut draft = product_json(43, "5", "5", "");
    draft["status"] = json!("draft");

    Mock::given(method("GET"))
        .and(path(format!("{PRODUCTS_PATH}/43")))
        .respond_with(ResponseTemplate::new(200).set_body_json(draft))
        .mount(&server)
        .await;

    assert!(test_client(&server).get_product(43).await.is_none());
}

#[tokio::test]
async fn list_categories_returns_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CATEGORIES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(categories_json()))
        .mount(&server)
        .await;

    let categories = test_client(&server).list_categories().await;
    assert_eq!(categories.len(), 2);
    assert!(categories[0].image.is_none());
    assert_eq!(categories[1].image.as_ref().map(|i| i.id), Some(5));
}

// ---------------------------------------------------------------------------
// soft-fail contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn server_error_degrades_every_operation_to_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server);

    let page = client.list_products(&ProductQuery::default()).await;
    assert!(page.items.is_empty());
    assert_eq!((page.total, page.total_pages), (0, 0));

    for preset in [
        ProductPreset::Featured,
        ProductPreset::OnSale,
        ProductPreset::Latest,
        ProductPreset::BestSelling,
    ] {
        let page = client.preset_products(preset, 8).await;
        assert!(page.items.is_empty(), "{preset:?} should be empty");
        assert_eq!((page.total, page.total_pages), (0, 0));
    }

    assert!(client.list_categories().await.is_empty());
    assert!(client.get_product(1).await.is_none());
    assert!(client.search_products("luna", 20).await.items.is_empty());
}

#[tokio::test]
async fn server_error_is_typed_on_fallible_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .try_list_products(&ProductQuery::default())
        .await
        .unwrap_err();
    assert!(
        matches!(err, CatalogError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn category_lookup_failure_degrades_slug_listing_to_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CATEGORIES_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(listing(&json!([product_json(1, "5", "5", "")]), "1", "1"))
        .expect(0)
        .mount(&server)
        .await;

    let query = ProductQuery {
        category: Some("collares".to_owned()),
        ..ProductQuery::default()
    };
    let page = test_client(&server).list_products(&query).await;
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .try_list_products(&ProductQuery::default())
        .await
        .unwrap_err();
    assert!(
        matches!(err, CatalogError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
    assert!(client
        .list_products(&ProductQuery::default())
        .await
        .items
        .is_empty());
}

#[tokio::test]
async fn network_failure_degrades_to_empty() {
    let client = unreachable_client();

    let page = client.list_products(&ProductQuery::default()).await;
    assert!(page.items.is_empty());
    assert_eq!((page.total, page.total_pages), (0, 0));
    assert!(client.list_categories().await.is_empty());
    assert!(client.get_product(1).await.is_none());

    let err = client.try_list_categories().await.unwrap_err();
    assert!(matches!(err, CatalogError::Http(_)), "expected Http, got: {err:?}");
}

#[tokio::test]
async fn timeout_degrades_to_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(
            listing(&json!([product_json(1, "5", "5", "")]), "1", "1")
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client =
        WooCommerceClient::new(&server.uri(), Credentials::default(), 1, "lofa-test/0.1").unwrap();
    let page = client.list_products(&ProductQuery::default()).await;
    assert!(page.items.is_empty());
}
