use geokit_permission::{PermissionError, Platform};

/// Result type for location operations.
pub type LocationResult<T> = Result<T, LocationError>;

/// Reasons a location operation produced no result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    /// Location services are disabled on the device or in the browser.
    #[error("location services disabled")]
    ServiceDisabled,
    /// The user declined the permission prompt. The app may ask again later.
    #[error("location permission denied")]
    PermissionDenied,
    /// Permission is permanently denied and must be changed in system settings.
    #[error("location permission permanently denied on {platform:?}")]
    PermissionDeniedForever {
        /// Platform flavor, used to choose settings guidance.
        platform: Platform,
    },
    /// No fix arrived within the configured bound.
    #[error("location request timed out")]
    Timeout,
    /// No fix is available, for example because nothing is cached yet.
    #[error("location not available")]
    NotAvailable,
    /// Reverse geocoding found no usable place.
    #[error("no address found for coordinates")]
    GeocodeMiss,
    /// Coordinates are not finite or lie outside the valid range.
    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        /// Latitude as supplied.
        latitude: f64,
        /// Longitude as supplied.
        longitude: f64,
    },
    /// The provider does not implement this capability.
    #[error("operation not supported by this location provider")]
    NotSupported,
    /// The provider failed.
    #[error("provider error: {0}")]
    Provider(String),
}

impl LocationError {
    /// Returns `true` for failures caused by the permission gate.
    #[must_use]
    pub const fn is_permission(&self) -> bool {
        matches!(
            self,
            Self::ServiceDisabled | Self::PermissionDenied | Self::PermissionDeniedForever { .. }
        )
    }
}

impl From<PermissionError> for LocationError {
    fn from(err: PermissionError) -> Self {
        match err {
            PermissionError::NotSupported => Self::NotSupported,
            PermissionError::Unknown(msg) => Self::Provider(msg),
        }
    }
}
