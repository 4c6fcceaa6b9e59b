//! IP-based geolocation, standing in for device geolocation on a terminal.

use std::time::Duration;

use async_trait::async_trait;
use dinepick_core::{Coordinate, LocationError, LocationProvider};
use reqwest::{Client, Url};

use crate::error::GeolocationError;
use crate::types::GeolocationBody;

/// Looks up the caller's approximate position from their public IP address.
pub struct IpGeolocator {
    client: Client,
    url: Url,
}

impl IpGeolocator {
    /// # Errors
    ///
    /// Returns [`GeolocationError::InvalidUrl`] if `url` does not parse, or
    /// [`GeolocationError::Http`] if the HTTP client cannot be built.
    pub fn new(
        url: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, GeolocationError> {
        let url = Url::parse(url).map_err(|e| GeolocationError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    /// Resolves the current position.
    ///
    /// # Errors
    ///
    /// - [`GeolocationError::Lookup`] if the service reports a failed lookup
    ///   or omits the coordinates.
    /// - [`GeolocationError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeolocationError::Deserialize`] if the body is not the expected JSON.
    pub async fn locate(&self) -> Result<Coordinate, GeolocationError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let body = response.error_for_status()?.text().await?;
        let answer: GeolocationBody = serde_json::from_str(&body)?;

        if answer.status != "success" {
            return Err(GeolocationError::Lookup(
                answer
                    .message
                    .unwrap_or_else(|| format!("lookup status {}", answer.status)),
            ));
        }

        match (answer.lat, answer.lon) {
            (Some(lat), Some(lon)) => {
                tracing::info!(
                    lat,
                    lon,
                    city = answer.city.as_deref().unwrap_or(""),
                    "ip geolocation resolved"
                );
                Ok(Coordinate::new(lat, lon))
            }
            _ => Err(GeolocationError::Lookup(
                "lookup answer carried no coordinates".to_string(),
            )),
        }
    }
}

#[async_trait]
impl LocationProvider for IpGeolocator {
    async fn current_location(&self) -> Result<Coordinate, LocationError> {
        self.locate().await.map_err(|err| {
            tracing::warn!(error = %err, "ip geolocation failed");
            LocationError::from(err)
        })
    }
}
