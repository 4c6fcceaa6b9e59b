//! Detail resolution and normalization of the picked candidate.

use crate::error::{PickerError, ServiceError};
use crate::services::{MapView, PlacesService};
use crate::types::{PlaceCandidate, PlaceDetails, SelectedRestaurant};

pub const DEFAULT_NAME: &str = "無名稱";
pub const DEFAULT_ADDRESS: &str = "無地址";
pub const DEFAULT_PHONE: &str = "無電話";
pub const DEFAULT_WEBSITE: &str = "無網站";
pub const DEFAULT_PRICE_LEVEL: u8 = 1;

/// Replaces every missing detail field with its fixed default.
///
/// Empty strings count as missing, and so does a price level outside `1..=4`.
/// `open_now` is the one field left optional.
#[must_use]
pub fn normalize_details(details: &PlaceDetails) -> SelectedRestaurant {
    SelectedRestaurant {
        name: text_or(details.name.as_deref(), DEFAULT_NAME),
        address: text_or(details.formatted_address.as_deref(), DEFAULT_ADDRESS),
        price_level: details
            .price_level
            .filter(|level| (1..=4).contains(level))
            .unwrap_or(DEFAULT_PRICE_LEVEL),
        rating: details.rating.unwrap_or(0.0),
        rating_count: details.user_ratings_total.unwrap_or(0),
        phone: text_or(details.formatted_phone_number.as_deref(), DEFAULT_PHONE),
        open_now: details.opening_hours.and_then(|hours| hours.open_now),
        website: text_or(details.website.as_deref(), DEFAULT_WEBSITE),
    }
}

fn text_or(value: Option<&str>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Fetches and normalizes the details of `candidate`.
///
/// When the answer carries the place's location the map is recentered on it;
/// without one the map is left where it is.
///
/// # Errors
///
/// - [`PickerError::DetailFetchFailed`] if the candidate has no identifier or
///   the service fails or reports a non-OK status.
/// - [`PickerError::Unknown`] if the service answer could not be understood.
pub async fn resolve<P, M>(
    places: &P,
    candidate: &PlaceCandidate,
    map: &mut M,
) -> Result<SelectedRestaurant, PickerError>
where
    P: PlacesService + ?Sized,
    M: MapView + ?Sized,
{
    let Some(place_id) = candidate.place_id.as_deref().filter(|id| !id.is_empty()) else {
        return Err(PickerError::DetailFetchFailed {
            reason: "candidate has no place id".to_string(),
        });
    };

    let details = places
        .place_details(place_id)
        .await
        .map_err(|err| match err {
            ServiceError::Malformed(message) => PickerError::Unknown(message),
            other => PickerError::DetailFetchFailed {
                reason: other.to_string(),
            },
        })?;

    if let Some(location) = details.location {
        map.pan_to(location);
    } else {
        tracing::debug!(place_id, "detail answer has no location; map not recentered");
    }

    Ok(normalize_details(&details))
}
