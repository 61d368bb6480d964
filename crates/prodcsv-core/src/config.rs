use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
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
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let log_level = or_default("PRODCSV_LOG_LEVEL", &defaults.log_level);
    let request_timeout_secs =
        parse_u64("PRODCSV_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PRODCSV_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("PRODCSV_USER_AGENT", &defaults.user_agent);

    Ok(AppConfig {
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
