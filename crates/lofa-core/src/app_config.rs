use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Store root, e.g. `https://lofa.store`. The REST API lives under
    /// `/wp-json/wc/v3/` relative to this URL.
    pub woocommerce_url: String,
    pub woocommerce_consumer_key: String,
    pub woocommerce_consumer_secret: String,
    pub catalog_timeout_secs: u64,
    pub catalog_user_agent: String,
}

impl AppConfig {
    /// Returns `true` when both WooCommerce credentials are non-empty.
    #[must_use]
    pub fn has_catalog_credentials(&self) -> bool {
        !self.woocommerce_consumer_key.is_empty() && !self.woocommerce_consumer_secret.is_empty()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |s: &str| if s.is_empty() { "" } else { "[redacted]" };
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("woocommerce_url", &self.woocommerce_url)
            .field(
                "woocommerce_consumer_key",
                &redact(&self.woocommerce_consumer_key),
            )
            .field(
                "woocommerce_consumer_secret",
                &redact(&self.woocommerce_consumer_secret),
            )
            .field("catalog_timeout_secs", &self.catalog_timeout_secs)
            .field("catalog_user_agent", &self.catalog_user_agent)
            .finish()
    }
}
