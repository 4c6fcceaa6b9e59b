//! Contracts for the external collaborators the workflow talks to.

use async_trait::async_trait;

use crate::error::{LocationError, ServiceError};
use crate::types::{Coordinate, NearbySearchRequest, PlaceCandidate, PlaceDetails, DEFAULT_CENTER};

/// A hosted places service offering nearby search and detail fetch.
///
/// Each call is single-shot: one request, one result-or-error.
#[async_trait]
pub trait PlacesService: Send + Sync {
    /// Returns the place summaries matching the request. An empty list is a
    /// successful answer.
    async fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> Result<Vec<PlaceCandidate>, ServiceError>;

    /// Fetches extended fields for one place identifier.
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, ServiceError>;
}

/// Source of the user's current position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> Result<Coordinate, LocationError>;
}

#[async_trait]
impl<T: LocationProvider + ?Sized> LocationProvider for Box<T> {
    async fn current_location(&self) -> Result<Coordinate, LocationError> {
        (**self).current_location().await
    }
}

/// A live map that can be recentered.
pub trait MapView {
    fn pan_to(&mut self, target: Coordinate);
}

/// Location provider that always answers with a fixed coordinate.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocation(pub Coordinate);

#[async_trait]
impl LocationProvider for StaticLocation {
    async fn current_location(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// Location provider for platforms with no geolocation support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocation;

#[async_trait]
impl LocationProvider for NoGeolocation {
    async fn current_location(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::Unsupported)
    }
}

/// Map zoom level used when the map is first shown.
pub const DEFAULT_ZOOM: u8 = 15;

/// In-memory map view that tracks its center and every pan applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewport {
    pub center: Coordinate,
    pub zoom: u8,
    pans: Vec<Coordinate>,
}

impl MapViewport {
    #[must_use]
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            pans: Vec::new(),
        }
    }

    /// Every coordinate the view was panned to, oldest first.
    #[must_use]
    pub fn pans(&self) -> &[Coordinate] {
        &self.pans
    }
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_ZOOM)
    }
}

impl MapView for MapViewport {
    fn pan_to(&mut self, target: Coordinate) {
        tracing::debug!(lat = target.latitude, lng = target.longitude, "map panned");
        self.center = target;
        self.pans.push(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_starts_at_default_center() {
        let view = MapViewport::default();
        assert_eq!(view.center, DEFAULT_CENTER);
        assert_eq!(view.zoom, 15);
        assert!(view.pans().is_empty());
    }

    #[test]
    fn pan_moves_center_and_records_history() {
        let mut view = MapViewport::default();
        let target = Coordinate::new(22.627, 120.301);
        view.pan_to(target);
        assert_eq!(view.center, target);
        assert_eq!(view.pans(), &[target]);
    }

    #[tokio::test]
    async fn no_geolocation_reports_unsupported() {
        let result = NoGeolocation.current_location().await;
        assert_eq!(result, Err(LocationError::Unsupported));
    }
}
