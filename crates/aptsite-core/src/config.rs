use crate::app_config::{AirtableSettings, AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com/v0/";

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
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank values are treated the same as unset ones.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("APTSITE_ENV", "development"))?;
    let bind_addr = parse_addr("APTSITE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("APTSITE_LOG_LEVEL", "info");

    let token = optional("AIRTABLE_TOKEN");
    let base_id = optional("AIRTABLE_BASE_ID");
    let pricing_table = or_default("AIRTABLE_PRICING_TABLE", "Pricing");
    let faq_table = or_default("AIRTABLE_FAQ_TABLE", "FAQ");
    let api_url = or_default("AIRTABLE_API_URL", DEFAULT_AIRTABLE_API_URL);
    let timeout_secs = parse_u64("APTSITE_UPSTREAM_TIMEOUT_SECS", "15")?;

    if timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "APTSITE_UPSTREAM_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    if token.is_none() && env == Environment::Production {
        return Err(ConfigError::MissingEnvVar("AIRTABLE_TOKEN".to_string()));
    }

    if token.is_some() && base_id.is_none() {
        return Err(ConfigError::MissingEnvVar("AIRTABLE_BASE_ID".to_string()));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        airtable: AirtableSettings {
            token,
            base_id,
            pricing_table,
            faq_table,
            api_url,
            timeout_secs,
        },
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "APTSITE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
