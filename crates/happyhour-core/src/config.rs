use crate::app_config::{AppConfig, DEFAULT_USER_AGENT, DEFAULT_YELP_BASE_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `HAPPYHOUR_YELP_BASE_URL` is not an http(s) URL.
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
/// Returns `ConfigError` if `HAPPYHOUR_YELP_BASE_URL` is not an http(s) URL.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so parsing can be tested against a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let log_level = or_default("HAPPYHOUR_LOG_LEVEL", "info");
    let yelp_api_key = lookup("YELP_API_KEY").ok().filter(|k| !k.is_empty());
    let yelp_base_url = or_default("HAPPYHOUR_YELP_BASE_URL", DEFAULT_YELP_BASE_URL);
    if !yelp_base_url.starts_with("http://") && !yelp_base_url.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "HAPPYHOUR_YELP_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{yelp_base_url}'"),
        });
    }
    let user_agent = or_default("HAPPYHOUR_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        log_level,
        yelp_api_key,
        yelp_base_url,
        user_agent,
    })
}
