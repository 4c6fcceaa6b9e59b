//! Places web-service response types.
//!
//! Every response is wrapped in a `{"status": "OK", ...}` envelope;
//! [`PlacesEnvelope`] captures that pattern generically.

use serde::Deserialize;

/// Top-level envelope for Places responses.
///
/// `status` is `"OK"` on success, `"ZERO_RESULTS"` for an empty search, or
/// an error code such as `"REQUEST_DENIED"` together with `error_message`.
#[derive(Debug, Deserialize)]
pub struct PlacesEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

/// Body of a `nearbysearch` response.
#[derive(Debug, Deserialize)]
pub struct NearbySearchBody {
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    /// Token for the next page. Only the first page is ever used.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Body of a `details` response.
#[derive(Debug, Deserialize)]
pub struct DetailsBody {
    #[serde(default)]
    pub result: Option<PlaceResult>,
}

/// A place as returned by either endpoint. Search results carry a subset of
/// these fields; details carry whatever was requested.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHoursBody>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
pub struct OpeningHoursBody {
    #[serde(default)]
    pub open_now: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Answer of the IP geolocation endpoint.
///
/// `{"status": "success", "lat": .., "lon": ..}` or
/// `{"status": "fail", "message": ".."}`.
#[derive(Debug, Deserialize)]
pub struct GeolocationBody {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub city: Option<String>,
}
