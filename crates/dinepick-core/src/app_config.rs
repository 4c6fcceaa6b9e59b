use crate::types::Coordinate;

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

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub places_api_key: String,
    pub places_base_url: String,
    /// `None` when geolocation is disabled.
    pub geolocation_url: Option<String>,
    pub language: String,
    pub search_radius_m: u32,
    pub user_agent: String,
    /// `None` leaves external calls without a timeout.
    pub request_timeout_secs: Option<u64>,
    pub default_center: Coordinate,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("places_api_key", &"[redacted]")
            .field("places_base_url", &self.places_base_url)
            .field("geolocation_url", &self.geolocation_url)
            .field("language", &self.language)
            .field("search_radius_m", &self.search_radius_m)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("default_center", &self.default_center)
            .finish()
    }
}
