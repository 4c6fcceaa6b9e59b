use dinepick_core::{LocationError, ServiceError};
use thiserror::Error;

/// Errors returned by the Places web-service client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a status other than `OK`.
    #[error("Places API status {status}")]
    Status {
        status: String,
        message: Option<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A status of `OK` arrived without the payload it promises.
    #[error("incomplete response for {context}")]
    Incomplete { context: String },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl From<PlacesError> for ServiceError {
    fn from(err: PlacesError) -> Self {
        match err {
            PlacesError::Status { status, message } => ServiceError::Status { status, message },
            PlacesError::Http(_) | PlacesError::InvalidBaseUrl { .. } => {
                ServiceError::Transport(err.to_string())
            }
            PlacesError::Deserialize { .. } | PlacesError::Incomplete { .. } => {
                ServiceError::Malformed(err.to_string())
            }
        }
    }
}

/// Errors returned by the IP geolocation client.
#[derive(Debug, Error)]
pub enum GeolocationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The lookup service answered `"status": "fail"`.
    #[error("{0}")]
    Lookup(String),

    #[error("JSON deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("invalid geolocation URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl From<GeolocationError> for LocationError {
    fn from(err: GeolocationError) -> Self {
        match err {
            GeolocationError::Http(ref e)
                if e.status().is_some_and(|s| s.as_u16() == 401 || s.as_u16() == 403) =>
            {
                LocationError::Denied(err.to_string())
            }
            GeolocationError::Lookup(message) => LocationError::Failed(message),
            other => LocationError::Failed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_status_and_message() {
        let err = PlacesError::Status {
            status: "REQUEST_DENIED".to_string(),
            message: Some("API key missing".to_string()),
        };
        assert_eq!(
            ServiceError::from(err),
            ServiceError::Status {
                status: "REQUEST_DENIED".to_string(),
                message: Some("API key missing".to_string()),
            }
        );
    }

    #[test]
    fn incomplete_answer_is_malformed() {
        let err = PlacesError::Incomplete {
            context: "details".to_string(),
        };
        assert!(matches!(ServiceError::from(err), ServiceError::Malformed(_)));
    }

    #[test]
    fn lookup_failure_passes_message_through() {
        let err = GeolocationError::Lookup("reserved range".to_string());
        assert_eq!(
            LocationError::from(err),
            LocationError::Failed("reserved range".to_string())
        );
    }
}
