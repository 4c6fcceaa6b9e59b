//! Candidate selection: one nearby search, one uniformly random pick.

use rand::Rng;

use crate::criteria::SearchCriteria;
use crate::error::{PickerError, ServiceError};
use crate::services::PlacesService;
use crate::types::{Coordinate, NearbySearchRequest, PlaceCandidate};

/// Place type every nearby search is restricted to.
pub const SEARCH_PLACE_TYPE: &str = "restaurant";

/// Picks an index in `0..len` with every index equally likely.
///
/// Returns `None` for an empty list.
pub fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    (len > 0).then(|| rng.random_range(0..len))
}

/// Runs one nearby search around `coordinate` and returns a random candidate.
///
/// No scoring, deduplication or sorting is applied: every returned place is
/// equally likely to be chosen regardless of its rank.
///
/// # Errors
///
/// - [`PickerError::SearchFailed`] if the service reports a non-OK status or
///   fails transport-side.
/// - [`PickerError::NoCandidates`] if the search succeeded with no results.
/// - [`PickerError::Unknown`] if the service answer could not be understood.
pub async fn search<P, R>(
    places: &P,
    rng: &mut R,
    coordinate: Coordinate,
    criteria: &SearchCriteria,
    radius_m: u32,
) -> Result<PlaceCandidate, PickerError>
where
    P: PlacesService + ?Sized,
    R: Rng + ?Sized,
{
    let request = NearbySearchRequest {
        location: coordinate,
        radius_m,
        place_type: SEARCH_PLACE_TYPE.to_string(),
        price_level: criteria.price_level,
        keyword: criteria.cuisine_keyword.clone(),
    };

    let mut candidates = places
        .nearby_search(&request)
        .await
        .map_err(|err| match err {
            ServiceError::Malformed(message) => PickerError::Unknown(message),
            other => PickerError::SearchFailed { source: other },
        })?;

    let Some(index) = pick_index(rng, candidates.len()) else {
        return Err(PickerError::NoCandidates);
    };

    tracing::info!(
        candidates = candidates.len(),
        index,
        keyword = request.keyword.as_deref().unwrap_or(""),
        price_level = ?request.price_level,
        "picked random candidate"
    );

    Ok(candidates.swap_remove(index))
}
