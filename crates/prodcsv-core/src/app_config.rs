/// Runtime settings for an export run.
///
/// Every field has a default, so an empty environment yields a usable config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Whole-request timeout for the catalog fetch.
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            request_timeout_secs: 30,
            user_agent: "prodcsv/0.1 (catalog-export)".to_string(),
        }
    }
}
