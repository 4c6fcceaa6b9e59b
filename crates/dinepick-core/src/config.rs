use crate::app_config::{AppConfig, Environment};
use crate::types::{Coordinate, DEFAULT_CENTER, DEFAULT_SEARCH_RADIUS_M};
use crate::ConfigError;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";
pub const DEFAULT_GEOLOCATION_URL: &str = "http://ip-api.com/json/";

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
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: u32| -> Result<u32, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u32>().map_err(|e| invalid(var, e.to_string())),
            Err(_) => Ok(default),
        }
    };

    let parse_f64 = |var: &str, default: f64| -> Result<f64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| invalid(var, format!("not a finite number: {raw}"))),
            Err(_) => Ok(default),
        }
    };

    let places_api_key = require("GOOGLE_MAPS_API_KEY")?;
    let env = parse_environment(&or_default("DINEPICK_ENV", "development"))?;
    let log_level = or_default("DINEPICK_LOG_LEVEL", "info");
    let places_base_url = or_default("DINEPICK_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let geolocation_url = Some(or_default("DINEPICK_GEOLOCATION_URL", DEFAULT_GEOLOCATION_URL))
        .filter(|url| !url.trim().is_empty());
    let language = or_default("DINEPICK_LANGUAGE", "zh-TW");
    let user_agent = or_default("DINEPICK_USER_AGENT", "dinepick/0.1 (restaurant-picker)");

    let search_radius_m = parse_u32("DINEPICK_SEARCH_RADIUS_M", DEFAULT_SEARCH_RADIUS_M)?;
    if search_radius_m == 0 {
        return Err(invalid("DINEPICK_SEARCH_RADIUS_M", "must be positive".to_string()));
    }

    let request_timeout_secs = match lookup("DINEPICK_REQUEST_TIMEOUT_SECS") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| invalid("DINEPICK_REQUEST_TIMEOUT_SECS", e.to_string()))?,
        ),
        Err(_) => None,
    };
    if request_timeout_secs == Some(0) {
        return Err(invalid(
            "DINEPICK_REQUEST_TIMEOUT_SECS",
            "must be positive; leave unset for no timeout".to_string(),
        ));
    }

    let latitude = parse_f64("DINEPICK_DEFAULT_LAT", DEFAULT_CENTER.latitude)?;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(invalid("DINEPICK_DEFAULT_LAT", format!("out of range: {latitude}")));
    }
    let longitude = parse_f64("DINEPICK_DEFAULT_LNG", DEFAULT_CENTER.longitude)?;
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(invalid("DINEPICK_DEFAULT_LNG", format!("out of range: {longitude}")));
    }

    Ok(AppConfig {
        env,
        log_level,
        places_api_key,
        places_base_url,
        geolocation_url,
        language,
        search_radius_m,
        user_agent,
        request_timeout_secs,
        default_center: Coordinate::new(latitude, longitude),
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DINEPICK_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
