use thiserror::Error;

/// Failure kinds surfaced by the restaurant-picking workflow.
///
/// Every variant is recovered where it occurs and rendered into
/// [`UiState::error_message`](crate::UiState) through its `Display` text.
#[derive(Debug, Error)]
pub enum PickerError {
    /// The platform offers no way to obtain a location.
    #[error("您的瀏覽器不支持地理位置功能")]
    LocationUnsupported,

    /// The platform geolocation call reported an error; the message is passed through.
    #[error("無法獲取位置信息：{0}")]
    Location(String),

    /// The nearby search errored transport-side or returned a non-OK status.
    #[error("搜尋餐廳失敗")]
    SearchFailed {
        #[source]
        source: ServiceError,
    },

    /// The nearby search succeeded but matched nothing.
    #[error("找不到符合條件的餐廳")]
    NoCandidates,

    /// The detail fetch failed, or the picked candidate had no usable identifier.
    #[error("無法取得餐廳詳細資訊")]
    DetailFetchFailed { reason: String },

    /// A failure whose shape the workflow does not recognize.
    #[error("未知錯誤")]
    Unknown(String),
}

impl From<LocationError> for PickerError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Unsupported => PickerError::LocationUnsupported,
            LocationError::Denied(message) | LocationError::Failed(message) => {
                PickerError::Location(message)
            }
        }
    }
}

/// Errors reported by a [`PlacesService`](crate::PlacesService) implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The service answered with a status other than `OK`.
    #[error("places service returned status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: String,
        message: Option<String>,
    },

    /// The request never produced a usable answer (network, TLS, HTTP status).
    #[error("places service transport error: {0}")]
    Transport(String),

    /// The answer arrived but could not be understood.
    #[error("malformed places service response: {0}")]
    Malformed(String),
}

/// Errors reported by a [`LocationProvider`](crate::LocationProvider).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("geolocation is not supported")]
    Unsupported,

    #[error("{0}")]
    Denied(String),

    #[error("{0}")]
    Failed(String),
}

/// Errors raised while loading [`AppConfig`](crate::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
