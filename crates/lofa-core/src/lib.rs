pub mod app_config;
pub mod cart;
pub mod categories;
pub mod config;
pub mod products;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use cart::{Cart, CartItem};
pub use categories::{CategoryImage, NormalizedCategory};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{NormalizedCategoryRef, NormalizedImage, NormalizedProduct};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
