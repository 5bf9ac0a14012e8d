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

/// Upstream Airtable location and credential.
///
/// `token` is only ever sourced from the environment. When it is absent the
/// server still starts outside production, but every upstream-backed route
/// answers with a configuration error instead of data.
#[derive(Clone)]
pub struct AirtableSettings {
    pub token: Option<String>,
    pub base_id: Option<String>,
    pub pricing_table: String,
    pub faq_table: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl AirtableSettings {
    /// Returns the token and base id when both are configured.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.token.as_deref(), self.base_id.as_deref()) {
            (Some(token), Some(base_id)) => Some((token, base_id)),
            _ => None,
        }
    }
}

impl std::fmt::Debug for AirtableSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirtableSettings")
            .field("token", &self.token.as_ref().map(|_| "[redacted]"))
            .field("base_id", &self.base_id)
            .field("pricing_table", &self.pricing_table)
            .field("faq_table", &self.faq_table)
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub airtable: AirtableSettings,
}
