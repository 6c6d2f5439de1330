use thiserror::Error;

pub mod aggregate;
pub mod app_config;
pub mod coerce;
pub mod config;
pub mod dedupe;
pub mod format;
pub mod types;

pub use aggregate::aggregate;
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use dedupe::{dedupe_subscribers, has_subscriber_data};
pub use format::{format_count, format_percent};
pub use types::{BrandSummary, KpiSet, SubscriberCount, VideoRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
