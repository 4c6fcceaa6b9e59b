//! Domain types shared by the workflow and the service adapters.

use serde::{Deserialize, Serialize};

/// Nearby-search radius in meters.
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 1500;

/// Initial map center (Taipei city center). Used for display only; it is
/// never substituted for a failed location fetch.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    latitude: 25.033,
    longitude: 121.565,
};

/// A geographic coordinate in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Relative cost level of a place, from cheapest (`One`) to most expensive (`Four`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    One,
    Two,
    Three,
    Four,
}

impl PriceTier {
    pub const ALL: [PriceTier; 4] = [
        PriceTier::One,
        PriceTier::Two,
        PriceTier::Three,
        PriceTier::Four,
    ];

    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            PriceTier::One => 1,
            PriceTier::Two => 2,
            PriceTier::Three => 3,
            PriceTier::Four => 4,
        }
    }

    /// Maps a level to a tier. Returns `None` outside `1..=4`.
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(PriceTier::One),
            2 => Some(PriceTier::Two),
            3 => Some(PriceTier::Three),
            4 => Some(PriceTier::Four),
            _ => None,
        }
    }

    /// Label shown in the price selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PriceTier::One => "$ (正常吃)",
            PriceTier::Two => "$$ (有點貴)",
            PriceTier::Three => "$$$ (吃好料)",
            PriceTier::Four => "$$$$ (最頂的)",
        }
    }
}

/// Parameters of one nearby-search call.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySearchRequest {
    pub location: Coordinate,
    pub radius_m: u32,
    pub place_type: String,
    pub price_level: Option<u8>,
    pub keyword: Option<String>,
}

/// One unresolved place summary returned by a nearby search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceCandidate {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub vicinity: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
}

/// Extended fields for one place, every one of them optional as the service
/// returns them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub price_level: Option<u8>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub formatted_phone_number: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    pub website: Option<String>,
    pub location: Option<Coordinate>,
}

/// The restaurant currently on display, with every missing field filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedRestaurant {
    pub name: String,
    pub address: String,
    /// Always within `1..=4`.
    pub price_level: u8,
    pub rating: f64,
    pub rating_count: u32,
    pub phone: String,
    pub open_now: Option<bool>,
    pub website: String,
}

/// Loading flag and the last error message shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub loading: bool,
    pub error_message: Option<String>,
}
