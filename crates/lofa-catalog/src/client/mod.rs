//! HTTP client for the WooCommerce REST API (`/wp-json/wc/v3/`).

mod categories;
mod products;

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::CatalogError;

/// Path of the versioned REST API below the store root.
const API_PREFIX: &str = "wp-json/wc/v3/";

/// WooCommerce REST API key pair.
///
/// Sent as HTTP Basic credentials when both halves are set. Otherwise no
/// `Authorization` header is sent, which is enough for stores that expose
/// the catalog publicly.
#[derive(Clone, Default)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
}

impl Credentials {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }

    /// `true` unless both the key and the secret are non-empty. Same rule
    /// as [`lofa_core::AppConfig::has_catalog_credentials`].
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.consumer_key.is_empty() || self.consumer_secret.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &"[redacted]")
            .field("consumer_secret", &"[redacted]")
            .finish()
    }
}

/// Client for a single WooCommerce store.
///
/// The fallible `try_*` methods return typed [`CatalogError`]s. Their
/// infallible counterparts (`list_products`, `list_categories`, ...) log the
/// error and degrade to an empty result so a flaky store renders as
/// "no products" instead of a broken page.
///
/// Requests are sent once: no retries, no backoff. A timeout is reported as
/// [`CatalogError::Http`].
pub struct WooCommerceClient {
    client: Client,
    credentials: Credentials,
    /// Store root joined with [`API_PREFIX`]; always ends in `/`.
    api_base: Url,
}

impl WooCommerceClient {
    /// Creates a client for the store rooted at `store_url`.
    ///
    /// `store_url` may include a path when WordPress is installed in a
    /// subdirectory (`https://example.com/shop`).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CatalogError::InvalidStoreUrl`] if
    /// `store_url` is not an absolute URL.
    pub fn new(
        store_url: &str,
        credentials: Credentials,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let api_base = api_base_url(store_url)?;

        Ok(Self {
            client,
            credentials,
            api_base,
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`WooCommerceClient::new`].
    pub fn from_app_config(config: &lofa_core::AppConfig) -> Result<Self, CatalogError> {
        let credentials = Credentials::new(
            config.woocommerce_consumer_key.clone(),
            config.woocommerce_consumer_secret.clone(),
        );
        if credentials.is_blank() {
            tracing::warn!(
                store_url = %config.woocommerce_url,
                "WooCommerce credentials not set; catalog requests will be anonymous"
            );
        }
        Self::new(
            &config.woocommerce_url,
            credentials,
            config.catalog_timeout_secs,
            &config.catalog_user_agent,
        )
    }

    /// Builds the URL for an API endpoint (e.g. `"products/categories"`)
    /// with percent-encoded query parameters.
    fn endpoint_url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url, CatalogError> {
        let mut url = self
            .api_base
            .join(endpoint)
            .map_err(|e| CatalogError::InvalidStoreUrl {
                store_url: self.api_base.to_string(),
                reason: format!("cannot join endpoint \"{endpoint}\": {e}"),
            })?;

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }

        Ok(url)
    }

    /// Sends a GET request and decodes the JSON body.
    ///
    /// Returns the decoded body together with the response headers, which
    /// carry the pagination totals for collection endpoints.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`]: HTTP 404.
    /// - [`CatalogError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`CatalogError::Http`]: network, TLS, or timeout failure.
    /// - [`CatalogError::Deserialize`]: body does not match `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<(T, HeaderMap), CatalogError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if !self.credentials.is_blank() {
            request = request.basic_auth(
                &self.credentials.consumer_key,
                Some(&self.credentials.consumer_secret),
            );
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                url: redact_url(&url),
            });
        }

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: redact_url(&url),
            });
        }

        let headers = response.headers().clone();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<T>(&body).map_err(|e| CatalogError::Deserialize {
            context: format!("response from {}", redact_url(&url)),
            source: e,
        })?;

        Ok((parsed, headers))
    }
}

/// Normalizes a store URL into the API base, e.g.
/// `"https://lofa.store"` → `"https://lofa.store/wp-json/wc/v3/"`.
fn api_base_url(store_url: &str) -> Result<Url, CatalogError> {
    let root = format!("{}/", store_url.trim().trim_end_matches('/'));
    let root = Url::parse(&root).map_err(|e| CatalogError::InvalidStoreUrl {
        store_url: store_url.to_owned(),
        reason: e.to_string(),
    })?;

    if root.cannot_be_a_base() || !matches!(root.scheme(), "http" | "https") {
        return Err(CatalogError::InvalidStoreUrl {
            store_url: store_url.to_owned(),
            reason: "expected an http(s) URL".to_owned(),
        });
    }

    root.join(API_PREFIX)
        .map_err(|e| CatalogError::InvalidStoreUrl {
            store_url: store_url.to_owned(),
            reason: e.to_string(),
        })
}

/// Renders a request URL for logs and errors without its query string, so
/// search terms and any query-string credentials never reach the logs.
fn redact_url(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
