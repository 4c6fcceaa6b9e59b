//! The picking session: location, form selections, current pick and UI state.
//!
//! Every transition is a method on [`RestaurantPicker`], so the whole
//! workflow can be driven and inspected without a rendering surface.
//!
//! Only one search is expected in flight. Nothing cancels or times out an
//! in-flight search; outcomes are applied in completion order through
//! [`RestaurantPicker::finish_search`], so the last one to complete wins.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::criteria::{SearchCriteria, SearchForm};
use crate::error::PickerError;
use crate::resolver::resolve;
use crate::selector::search;
use crate::services::{LocationProvider, MapView, PlacesService};
use crate::types::{Coordinate, SelectedRestaurant, UiState, DEFAULT_SEARCH_RADIUS_M};

pub struct RestaurantPicker<P, L, M> {
    places: P,
    locator: L,
    map: Option<M>,
    rng: StdRng,
    radius_m: u32,
    location: Option<Coordinate>,
    form: SearchForm,
    selected: Option<SelectedRestaurant>,
    ui: UiState,
}

impl<P, L, M> RestaurantPicker<P, L, M>
where
    P: PlacesService,
    L: LocationProvider,
    M: MapView,
{
    /// Creates an idle session with no location, no map and no pick.
    pub fn new(places: P, locator: L) -> Self {
        Self {
            places,
            locator,
            map: None,
            rng: StdRng::from_rng(&mut rand::rng()),
            radius_m: DEFAULT_SEARCH_RADIUS_M,
            location: None,
            form: SearchForm::default(),
            selected: None,
            ui: UiState::default(),
        }
    }

    /// Replaces the random source, e.g. with a seeded one.
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius_m: u32) -> Self {
        self.radius_m = radius_m;
        self
    }

    /// Hands the session a live map. Searches are refused until one is attached.
    pub fn attach_map(&mut self, map: M) {
        self.map = Some(map);
    }

    #[must_use]
    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    #[must_use]
    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedRestaurant> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    #[must_use]
    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SearchForm {
        &mut self.form
    }

    /// Whether the search control is enabled: a coordinate is held and no
    /// search is loading.
    #[must_use]
    pub fn search_enabled(&self) -> bool {
        self.location.is_some() && !self.ui.loading
    }

    /// Asks the location provider for the current position.
    ///
    /// On success the coordinate is stored and the map, if any, is recentered.
    /// On failure the error message is shown and any previous coordinate is
    /// kept.
    ///
    /// # Errors
    ///
    /// [`PickerError::LocationUnsupported`] or [`PickerError::Location`].
    pub async fn acquire_location(&mut self) -> Result<Coordinate, PickerError> {
        self.ui.error_message = None;

        match self.locator.current_location().await {
            Ok(coordinate) => {
                tracing::info!(
                    lat = coordinate.latitude,
                    lng = coordinate.longitude,
                    "location acquired"
                );
                self.location = Some(coordinate);
                if let Some(map) = self.map.as_mut() {
                    map.pan_to(coordinate);
                }
                Ok(coordinate)
            }
            Err(err) => {
                let err = PickerError::from(err);
                tracing::warn!(error = %err, "location unavailable");
                self.ui.error_message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Enters `Loading` and returns what the search needs, or `None` when no
    /// coordinate or no map is held (in which case nothing changes).
    pub fn begin_search(&mut self) -> Option<(Coordinate, SearchCriteria)> {
        let coordinate = self.location?;
        self.map.as_ref()?;

        self.ui.loading = true;
        self.ui.error_message = None;
        Some((coordinate, self.form.criteria()))
    }

    /// Leaves `Loading` and applies one search outcome.
    ///
    /// Success replaces the displayed restaurant and clears the error.
    /// Failure sets the error message and leaves the previously displayed
    /// restaurant as it was.
    ///
    /// # Errors
    ///
    /// Passes the failed outcome back to the caller after recording it.
    pub fn finish_search(
        &mut self,
        outcome: Result<SelectedRestaurant, PickerError>,
    ) -> Result<SelectedRestaurant, PickerError> {
        self.ui.loading = false;

        match outcome {
            Ok(restaurant) => {
                tracing::info!(name = %restaurant.name, "restaurant selected");
                self.selected = Some(restaurant.clone());
                self.ui.error_message = None;
                Ok(restaurant)
            }
            Err(err) => {
                tracing::warn!(error = %err, detail = ?err, "search attempt failed");
                self.ui.error_message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Runs one full cycle: nearby search, random pick, detail fetch.
    ///
    /// Returns `Ok(None)` without touching any state when the session has no
    /// coordinate or no map.
    ///
    /// # Errors
    ///
    /// Any [`PickerError`] raised by the search or the detail fetch; it is
    /// also recorded in [`UiState::error_message`].
    pub async fn pick_restaurant(&mut self) -> Result<Option<SelectedRestaurant>, PickerError> {
        let Some((coordinate, criteria)) = self.begin_search() else {
            tracing::debug!("search requested without a location or map; ignoring");
            return Ok(None);
        };

        let outcome = self.run_cycle(coordinate, &criteria).await;
        self.finish_search(outcome).map(Some)
    }

    async fn run_cycle(
        &mut self,
        coordinate: Coordinate,
        criteria: &SearchCriteria,
    ) -> Result<SelectedRestaurant, PickerError> {
        let candidate = search(
            &self.places,
            &mut self.rng,
            coordinate,
            criteria,
            self.radius_m,
        )
        .await?;

        let Some(map) = self.map.as_mut() else {
            return Err(PickerError::Unknown("map view detached mid-search".to_string()));
        };
        resolve(&self.places, &candidate, map).await
    }
}

#[cfg(test)]
#[path = "picker_test.rs"]
mod tests;
