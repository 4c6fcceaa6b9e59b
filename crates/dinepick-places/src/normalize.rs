//! Conversion of Places response types into the core contract types.

use dinepick_core::{Coordinate, OpeningHours, PlaceCandidate, PlaceDetails};

use crate::types::PlaceResult;

#[must_use]
pub fn to_candidate(result: PlaceResult) -> PlaceCandidate {
    PlaceCandidate {
        place_id: result.place_id,
        name: result.name,
        vicinity: result.vicinity,
    }
}

/// Maps a details result field by field. Nothing is defaulted here; the
/// core resolver owns the fallback values.
#[must_use]
pub fn to_details(result: PlaceResult) -> PlaceDetails {
    PlaceDetails {
        name: result.name,
        formatted_address: result.formatted_address,
        price_level: result.price_level,
        rating: result.rating,
        user_ratings_total: result.user_ratings_total,
        formatted_phone_number: result.formatted_phone_number,
        opening_hours: result.opening_hours.map(|h| OpeningHours {
            open_now: h.open_now,
        }),
        website: result.website,
        location: result
            .geometry
            .and_then(|g| g.location)
            .map(|l| Coordinate::new(l.lat, l.lng)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_pick_up_nested_location_and_hours() {
        let result: PlaceResult = serde_json::from_value(serde_json::json!({
            "name": "度小月",
            "price_level": 2,
            "opening_hours": { "open_now": false },
            "geometry": { "location": { "lat": 25.0418, "lng": 121.5437 } }
        }))
        .unwrap();

        let details = to_details(result);
        assert_eq!(details.name.as_deref(), Some("度小月"));
        assert_eq!(details.price_level, Some(2));
        assert_eq!(details.opening_hours, Some(OpeningHours { open_now: Some(false) }));
        assert_eq!(details.location, Some(Coordinate::new(25.0418, 121.5437)));
        assert_eq!(details.website, None);
    }

    #[test]
    fn geometry_without_location_yields_no_coordinate() {
        let result: PlaceResult =
            serde_json::from_value(serde_json::json!({ "geometry": {} })).unwrap();
        assert_eq!(to_details(result).location, None);
    }

    #[test]
    fn candidate_keeps_summary_fields() {
        let result: PlaceResult = serde_json::from_value(serde_json::json!({
            "place_id": "ChIJabc",
            "name": "Bistro",
            "vicinity": "No. 1, Section 1"
        }))
        .unwrap();
        let candidate = to_candidate(result);
        assert_eq!(candidate.place_id.as_deref(), Some("ChIJabc"));
        assert_eq!(candidate.vicinity.as_deref(), Some("No. 1, Section 1"));
    }
}
