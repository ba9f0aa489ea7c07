use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use geokit_permission::{PermissionStatus, Platform};
use serde::{Deserialize, Serialize};

use crate::{LocationAccuracy, LocationResult, Position};

/// One candidate place returned by reverse geocoding.
///
/// Providers return candidates ranked best first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// Street name and number.
    pub street: Option<String>,
    /// City or town.
    pub locality: Option<String>,
    /// State, province or region.
    pub administrative_area: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Country name.
    pub country: Option<String>,
}

/// Backend that performs the actual platform location work.
///
/// Every method may fail; [`crate::LocationGateway`] decides what a failure
/// means for its callers. Implementations hold no per-call state, so a single
/// provider may serve concurrent requests.
pub trait LocationProvider: Send + Sync {
    /// Whether location services are switched on at the OS or browser level.
    fn is_location_service_enabled(&self) -> impl Future<Output = LocationResult<bool>> + Send;

    /// Current permission state, without prompting.
    fn check_permission(&self) -> impl Future<Output = LocationResult<PermissionStatus>> + Send;

    /// Shows the permission prompt and returns the resulting state.
    fn request_permission(&self) -> impl Future<Output = LocationResult<PermissionStatus>> + Send;

    /// Acquires a fresh fix.
    ///
    /// `timeout` is a hint for providers that can bound acquisition
    /// themselves; the gateway enforces it regardless.
    fn current_position(
        &self,
        accuracy: LocationAccuracy,
        timeout: Duration,
    ) -> impl Future<Output = LocationResult<Position>> + Send;

    /// The most recent fix cached by the platform, if any.
    fn last_known_position(&self) -> impl Future<Output = LocationResult<Option<Position>>> + Send;

    /// Places near the given coordinates, best match first.
    fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> impl Future<Output = LocationResult<Vec<PlaceCandidate>>> + Send;

    /// Platform flavor reported alongside terminal permission states.
    fn platform(&self) -> Platform {
        Platform::current()
    }
}

impl<T: LocationProvider> LocationProvider for Arc<T> {
    fn is_location_service_enabled(&self) -> impl Future<Output = LocationResult<bool>> + Send {
        (**self).is_location_service_enabled()
    }

    fn check_permission(&self) -> impl Future<Output = LocationResult<PermissionStatus>> + Send {
        (**self).check_permission()
    }

    fn request_permission(&self) -> impl Future<Output = LocationResult<PermissionStatus>> + Send {
        (**self).request_permission()
    }

    fn current_position(
        &self,
        accuracy: LocationAccuracy,
        timeout: Duration,
    ) -> impl Future<Output = LocationResult<Position>> + Send {
        (**self).current_position(accuracy, timeout)
    }

    fn last_known_position(&self) -> impl Future<Output = LocationResult<Option<Position>>> + Send {
        (**self).last_known_position()
    }

    fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> impl Future<Output = LocationResult<Vec<PlaceCandidate>>> + Send {
        (**self).reverse_geocode(latitude, longitude)
    }

    fn platform(&self) -> Platform {
        (**self).platform()
    }
}
