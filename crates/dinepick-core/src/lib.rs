//! Core workflow for picking a random nearby restaurant.
//!
//! The workflow is a straight sequential composition:
//! acquire a location, build search criteria, run a nearby search, pick one
//! candidate at random, then resolve its details. External collaborators
//! (the places service, device geolocation and the map view) are reached only
//! through the traits in [`services`].

pub mod app_config;
pub mod config;
pub mod criteria;
pub mod cuisine;
pub mod error;
pub mod picker;
pub mod resolver;
pub mod selector;
pub mod services;
pub mod types;
pub mod view;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use criteria::{build_criteria, SearchCriteria, SearchForm};
pub use cuisine::Cuisine;
pub use error::{ConfigError, LocationError, PickerError, ServiceError};
pub use picker::RestaurantPicker;
pub use resolver::{normalize_details, resolve};
pub use selector::{pick_index, search, SEARCH_PLACE_TYPE};
pub use services::{
    LocationProvider, MapView, MapViewport, NoGeolocation, PlacesService, StaticLocation,
    DEFAULT_ZOOM,
};
pub use types::{
    Coordinate, NearbySearchRequest, OpeningHours, PlaceCandidate, PlaceDetails, PriceTier,
    SelectedRestaurant, UiState, DEFAULT_CENTER, DEFAULT_SEARCH_RADIUS_M,
};
