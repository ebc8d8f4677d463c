use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("LOFA_ENV", "development"));

    let bind_addr = or_default("LOFA_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("LOFA_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("LOFA_LOG_LEVEL", "info");

    let woocommerce_url = or_default("WOOCOMMERCE_URL", "https://lofa.store");
    if !woocommerce_url.starts_with("http://") && !woocommerce_url.starts_with("https://") {
        return Err(invalid(
            "WOOCOMMERCE_URL",
            format!("\"{woocommerce_url}\" must start with http:// or https://"),
        ));
    }

    // Credentials may be blank locally (the store answers public reads
    // anonymously), but a production deploy without them is misconfigured.
    let credential = |var: &str| -> Result<String, ConfigError> {
        let value = lookup(var).unwrap_or_default();
        if value.trim().is_empty() && env == Environment::Production {
            return Err(ConfigError::MissingEnvVar(var.to_string()));
        }
        Ok(value)
    };
    let woocommerce_consumer_key = credential("WOOCOMMERCE_CONSUMER_KEY")?;
    let woocommerce_consumer_secret = credential("WOOCOMMERCE_CONSUMER_SECRET")?;

    let catalog_timeout_secs = parse_u64("LOFA_CATALOG_TIMEOUT_SECS", "30")?;
    if catalog_timeout_secs == 0 {
        return Err(invalid(
            "LOFA_CATALOG_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }
    let catalog_user_agent = or_default("LOFA_CATALOG_USER_AGENT", "lofa/0.1 (storefront)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        woocommerce_url,
        woocommerce_consumer_key,
        woocommerce_consumer_secret,
        catalog_timeout_secs,
        catalog_user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
