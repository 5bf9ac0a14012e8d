pub mod app_config;
pub mod config;
pub mod error;
pub mod price;
pub mod records;

pub use app_config::{AirtableSettings, AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use price::{format_usd, normalize_price};
pub use records::{
    FaqEntry, GatewayPayload, PricingEntry, Record, RecordKind, RecordsPage, ANSWER_FALLBACK,
    CALL_FOR_PRICING, QUESTION_FALLBACK, UNIT_FALLBACK,
};
