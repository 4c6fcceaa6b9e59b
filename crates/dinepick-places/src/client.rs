//! HTTP client for the Places web service.
//!
//! Wraps `reqwest` with API key handling and typed response
//! deserialization. Both endpoints check the `"status"` field of the JSON
//! envelope and surface non-OK answers as [`PlacesError::Status`].

use std::time::Duration;

use async_trait::async_trait;
use dinepick_core::config::DEFAULT_PLACES_BASE_URL;
use dinepick_core::{
    AppConfig, NearbySearchRequest, PlaceCandidate, PlaceDetails, PlacesService, ServiceError,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::normalize::{to_candidate, to_details};
use crate::types::{DetailsBody, NearbySearchBody, PlacesEnvelope};

const DEFAULT_LANGUAGE: &str = "zh-TW";
const DEFAULT_USER_AGENT: &str = "dinepick/0.1 (restaurant-picker)";

/// Fields requested from the details endpoint.
pub const DETAIL_FIELDS: &str = "name,formatted_address,price_level,rating,user_ratings_total,\
formatted_phone_number,opening_hours,website,geometry/location";

/// Client for the Places web service.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    language: String,
}

impl PlacesClient {
    /// Creates a client pointed at the production Places API.
    ///
    /// `timeout_secs` of `None` leaves requests without an overall timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: Option<u64>) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, DEFAULT_PLACES_BASE_URL, DEFAULT_USER_AGENT, timeout_secs)
    }

    /// Creates a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`PlacesClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PlacesError> {
        Ok(Self::with_base_url(
            &config.places_api_key,
            &config.places_base_url,
            &config.user_agent,
            config.request_timeout_secs,
        )?
        .language(&config.language))
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        base_url: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, PlacesError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        // Ensure exactly one trailing slash so endpoint paths are joined
        // beneath the base rather than replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            language: DEFAULT_LANGUAGE.to_owned(),
        })
    }

    /// Sets the `language` parameter sent with every request.
    #[must_use]
    pub fn language(mut self, language: &str) -> Self {
        language.clone_into(&mut self.language);
        self
    }

    /// Runs one nearby search and returns the first page of results.
    ///
    /// `ZERO_RESULTS` is returned as an empty list.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Status`] for any status other than `OK` or `ZERO_RESULTS`.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> Result<Vec<PlaceCandidate>, PlacesError> {
        let url = self.nearby_search_url(request)?;
        let envelope: PlacesEnvelope<NearbySearchBody> =
            self.request_envelope(&url, "nearbysearch").await?;

        match envelope.status.as_str() {
            "OK" => {
                tracing::debug!(
                    results = envelope.data.results.len(),
                    has_more = envelope.data.next_page_token.is_some(),
                    "nearby search answered"
                );
                Ok(envelope.data.results.into_iter().map(to_candidate).collect())
            }
            "ZERO_RESULTS" => Ok(Vec::new()),
            _ => Err(PlacesError::Status {
                status: envelope.status,
                message: envelope.error_message,
            }),
        }
    }

    /// Fetches the extended fields listed in [`DETAIL_FIELDS`] for one place.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Status`] for any status other than `OK`.
    /// - [`PlacesError::Incomplete`] if an `OK` answer has no `result`.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let url = self.build_url(
            "details/json",
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        )?;
        let envelope: PlacesEnvelope<DetailsBody> = self.request_envelope(&url, "details").await?;

        if envelope.status != "OK" {
            return Err(PlacesError::Status {
                status: envelope.status,
                message: envelope.error_message,
            });
        }

        envelope
            .data
            .result
            .map(to_details)
            .ok_or_else(|| PlacesError::Incomplete {
                context: format!("details(place_id={place_id})"),
            })
    }

    fn nearby_search_url(&self, request: &NearbySearchRequest) -> Result<Url, PlacesError> {
        let location = request.location.to_string();
        let radius = request.radius_m.to_string();
        let mut params = vec![
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("type", request.place_type.as_str()),
        ];

        // The web service filters by a price range; one tier is a range of one.
        let price;
        if let Some(level) = request.price_level {
            price = level.to_string();
            params.push(("minprice", &price));
            params.push(("maxprice", &price));
        }
        if let Some(keyword) = request.keyword.as_deref().filter(|k| !k.is_empty()) {
            params.push(("keyword", keyword));
        }

        self.build_url("nearbysearch/json", &params)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters, followed by `language` and `key`.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("language", &self.language);
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body
    /// into the expected envelope.
    async fn request_envelope<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<PlacesEnvelope<T>, PlacesError> {
        tracing::debug!(endpoint = context, url = %redact_key(url), "places request");
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

/// Renders `url` with the `key` parameter masked, for logging.
fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "[redacted]".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[async_trait]
impl PlacesService for PlacesClient {
    async fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> Result<Vec<PlaceCandidate>, ServiceError> {
        PlacesClient::nearby_search(self, request)
            .await
            .map_err(ServiceError::from)
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, ServiceError> {
        PlacesClient::place_details(self, place_id)
            .await
            .map_err(ServiceError::from)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
