pub mod client;
pub mod error;
pub mod geolocation;
pub mod normalize;
pub mod types;

pub use client::PlacesClient;
pub use error::{GeolocationError, PlacesError};
pub use geolocation::IpGeolocator;
