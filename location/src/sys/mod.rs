//! Platform-specific location implementations.
//!
//! [`SystemProvider`] forwards to the backend compiled for the current
//! target. Targets without a backend report services as disabled, so the
//! gateway never reaches the fix or geocode calls there.

use std::time::Duration;

use geokit_permission::PermissionStatus;

use crate::{LocationAccuracy, LocationProvider, LocationResult, PlaceCandidate, Position};

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
mod linux;

// Re-export platform implementations
#[cfg(target_os = "windows")]
use self::windows as platform;

#[cfg(target_os = "linux")]
use self::linux as platform;

// Fallback for unsupported platforms
#[cfg(not(any(target_os = "windows", target_os = "linux")))]
mod platform {
    use std::time::Duration;

    use crate::{LocationAccuracy, LocationError, LocationResult, Position};

    pub(crate) async fn service_enabled() -> LocationResult<bool> {
        Ok(false)
    }

    pub(crate) async fn current_position(
        _accuracy: LocationAccuracy,
        _timeout: Duration,
    ) -> LocationResult<Position> {
        Err(LocationError::NotSupported)
    }
}

/// The device's own location stack.
///
/// Linux goes through GeoClue2 on the system D-Bus, Windows through the WinRT
/// `Geolocator`. Neither exposes a cached fix or reverse geocoding, so
/// `last_known_position` is always empty and `reverse_geocode` reports
/// [`crate::LocationError::NotSupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProvider;

impl SystemProvider {
    /// Creates the provider. It holds no resources until a call is made.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LocationProvider for SystemProvider {
    async fn is_location_service_enabled(&self) -> LocationResult<bool> {
        platform::service_enabled().await
    }

    async fn check_permission(&self) -> LocationResult<PermissionStatus> {
        Ok(geokit_permission::check().await?)
    }

    async fn request_permission(&self) -> LocationResult<PermissionStatus> {
        Ok(geokit_permission::request().await?)
    }

    async fn current_position(
        &self,
        accuracy: LocationAccuracy,
        timeout: Duration,
    ) -> LocationResult<Position> {
        platform::current_position(accuracy, timeout).await
    }

    async fn last_known_position(&self) -> LocationResult<Option<Position>> {
        Ok(None)
    }

    async fn reverse_geocode(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> LocationResult<Vec<PlaceCandidate>> {
        Err(crate::LocationError::NotSupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LocationError, LocationGateway};

    #[tokio::test]
    async fn system_provider_has_no_cached_fix() {
        let provider = SystemProvider::new();
        assert_eq!(provider.last_known_position().await, Ok(None));
    }

    #[tokio::test]
    async fn system_provider_cannot_geocode() {
        let gateway = LocationGateway::new(SystemProvider::new());
        assert_eq!(
            gateway.address(51.5, -0.12).await,
            Err(LocationError::NotSupported)
        );
        assert_eq!(gateway.get_address(51.5, -0.12).await, None);
    }
}
