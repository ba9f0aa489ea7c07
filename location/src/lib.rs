//! Cross-platform location access.
//!
//! The entry point is [`LocationGateway`], which wraps a [`LocationProvider`]
//! and turns every provider interaction into a total operation: permission
//! denials, disabled services, timeouts and provider faults all come back as
//! `false` or `None`. Callers that need to know *why* a request failed can use
//! the `Result`-returning twins of each operation instead.
//!
//! [`SystemProvider`] talks to GeoClue2 on Linux and the WinRT `Geolocator`
//! on Windows. Tests and other hosts plug in their own provider.
//!
//! ```ignore
//! use geokit_location::{LocationGateway, SystemProvider};
//!
//! let gateway = LocationGateway::new(SystemProvider::new());
//! if let Some(position) = gateway.get_current_position().await {
//!     let address = gateway
//!         .get_address(position.latitude, position.longitude)
//!         .await;
//!     println!("{position:?} {address:?}");
//! }
//! ```

#![warn(missing_docs)]

mod address;
mod config;
mod distance;
mod error;
mod gateway;
mod provider;
/// Platform-specific implementations.
pub mod sys;

pub use address::AddressComponents;
pub use config::{DEFAULT_TIMEOUT, GatewayConfig, LocationAccuracy};
pub use distance::{EARTH_RADIUS_METERS, distance_between};
pub use error::{LocationError, LocationResult};
pub use gateway::{LocationGateway, PermissionOutcome};
pub use provider::{LocationProvider, PlaceCandidate};
pub use sys::SystemProvider;

pub use geokit_permission::{PermissionStatus, Platform};

use serde::{Deserialize, Serialize};

/// A single location fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,
    /// Horizontal accuracy in meters, if the provider reported one.
    pub accuracy: Option<f64>,
    /// Altitude in meters above sea level, if available.
    pub altitude: Option<f64>,
    /// Timestamp as Unix epoch milliseconds.
    pub timestamp: u64,
}

impl Position {
    /// Creates a position stamped with the current time and no accuracy data.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
            altitude: None,
            timestamp: timestamp_now(),
        }
    }

    /// Great-circle distance to another position, in meters.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        distance_between(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

pub(crate) fn timestamp_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_position_is_timestamped() {
        let position = Position::new(48.8566, 2.3522);
        assert!(position.timestamp > 0);
        assert_eq!(position.accuracy, None);
    }

    #[test]
    fn distance_to_matches_free_function() {
        let paris = Position::new(48.8566, 2.3522);
        let london = Position::new(51.5074, -0.1278);
        let expected = distance_between(48.8566, 2.3522, 51.5074, -0.1278);
        assert!((paris.distance_to(&london) - expected).abs() < f64::EPSILON);
    }
}
