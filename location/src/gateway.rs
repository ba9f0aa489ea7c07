use std::pin::pin;

use futures::future::{Either, select};
use futures_timer::Delay;
use geokit_permission::{PermissionStatus, Platform};
use log::{debug, info, warn};

use crate::{
    AddressComponents, GatewayConfig, LocationError, LocationProvider, LocationResult, Position,
};

/// Result of running the permission negotiation.
#[derive(Debug, Clone, PartialEq)]
pub enum PermissionOutcome {
    /// Location access is allowed.
    Granted,
    /// Location services are off. No prompt was shown.
    ServiceDisabled,
    /// The user declined, but may be asked again later.
    Denied,
    /// Permission is permanently denied. No prompt was shown.
    DeniedForever {
        /// Platform flavor, used to choose settings guidance.
        platform: Platform,
    },
    /// The provider failed while negotiating.
    Fault(LocationError),
}

impl PermissionOutcome {
    /// Returns `true` only for [`PermissionOutcome::Granted`].
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Converts the outcome into the error a gated operation reports.
    ///
    /// # Errors
    /// Returns the matching [`LocationError`] for every outcome except `Granted`.
    pub fn into_result(self) -> LocationResult<()> {
        match self {
            Self::Granted => Ok(()),
            Self::ServiceDisabled => Err(LocationError::ServiceDisabled),
            Self::Denied => Err(LocationError::PermissionDenied),
            Self::DeniedForever { platform } => {
                Err(LocationError::PermissionDeniedForever { platform })
            }
            Self::Fault(err) => Err(err),
        }
    }
}

/// Mediates every location request between application code and a provider.
///
/// The gateway keeps no state between calls besides its provider and
/// immutable config, so it can be shared and called concurrently.
///
/// Each operation comes in two shapes. The plain one (`request_permission`,
/// `get_current_position`, `get_address`, ...) is total: it never fails and
/// reports every problem as `false` or `None`. The `Result` one
/// (`negotiate_permission`, `current_position`, `address`, ...) says why.
#[derive(Debug, Clone)]
pub struct LocationGateway<P> {
    provider: P,
    config: GatewayConfig,
}

impl<P: LocationProvider> LocationGateway<P> {
    /// Creates a gateway with the default config.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, GatewayConfig::default())
    }

    /// Creates a gateway with a custom config.
    pub const fn with_config(provider: P, config: GatewayConfig) -> Self {
        Self { provider, config }
    }

    /// The wrapped provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// The active config.
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Whether location services are switched on. `false` on provider failure.
    pub async fn is_location_service_enabled(&self) -> bool {
        self.provider
            .is_location_service_enabled()
            .await
            .unwrap_or_else(|err| {
                warn!("location service query failed: {err}");
                false
            })
    }

    /// Current permission state without prompting. `Denied` on provider failure.
    pub async fn get_permission_status(&self) -> PermissionStatus {
        self.provider.check_permission().await.unwrap_or_else(|err| {
            warn!("permission status query failed: {err}");
            PermissionStatus::Denied
        })
    }

    /// Ensures location permission, prompting the user if that is allowed.
    ///
    /// Returns `false` when services are disabled, the user declines, the
    /// permission is permanently denied, or the provider fails.
    pub async fn request_permission(&self) -> bool {
        self.negotiate_permission().await.is_granted()
    }

    /// Runs permission negotiation and reports how it ended.
    ///
    /// No prompt is shown when services are disabled or the permission is
    /// permanently denied.
    pub async fn negotiate_permission(&self) -> PermissionOutcome {
        match self.try_negotiate().await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("permission negotiation failed: {err}");
                PermissionOutcome::Fault(err)
            }
        }
    }

    async fn try_negotiate(&self) -> LocationResult<PermissionOutcome> {
        if !self.provider.is_location_service_enabled().await? {
            debug!("location services disabled, skipping permission prompt");
            return Ok(PermissionOutcome::ServiceDisabled);
        }

        let mut status = self.provider.check_permission().await?;
        if status.is_promptable() {
            let answer = self.provider.request_permission().await?;
            info!("location permission prompt: {status:?} -> {answer:?}");
            status = answer;
        }

        Ok(match status {
            PermissionStatus::Granted => PermissionOutcome::Granted,
            PermissionStatus::DeniedForever => PermissionOutcome::DeniedForever {
                platform: self.provider.platform(),
            },
            PermissionStatus::Denied | PermissionStatus::NotDetermined => {
                PermissionOutcome::Denied
            }
        })
    }

    /// A fresh fix, or `None` if permission is missing, the provider fails,
    /// or no fix arrives within the configured timeout.
    pub async fn get_current_position(&self) -> Option<Position> {
        self.current_position().await.ok()
    }

    /// A fresh fix bounded by the configured timeout.
    ///
    /// # Errors
    /// Returns a permission error if the gate fails (the provider is not asked
    /// for a fix), [`LocationError::Timeout`] if the bound expires, or the
    /// provider's error.
    pub async fn current_position(&self) -> LocationResult<Position> {
        self.negotiate_permission().await.into_result()?;

        let GatewayConfig { accuracy, timeout } = self.config;
        debug!("requesting fix (accuracy {accuracy:?}, timeout {timeout:?})");

        let fix = pin!(self.provider.current_position(accuracy, timeout));
        let result = match select(fix, Delay::new(timeout)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(LocationError::Timeout),
        };

        if let Err(err) = &result {
            warn!("location fix failed: {err}");
        }
        result
    }

    /// The platform's cached fix, or `None` if permission is missing, no fix
    /// is cached, or the provider fails.
    pub async fn get_last_known_position(&self) -> Option<Position> {
        self.last_known_position().await.ok()
    }

    /// The platform's cached fix.
    ///
    /// # Errors
    /// Returns a permission error if the gate fails,
    /// [`LocationError::NotAvailable`] when nothing is cached, or the
    /// provider's error.
    pub async fn last_known_position(&self) -> LocationResult<Position> {
        self.negotiate_permission().await.into_result()?;

        debug!("requesting last known fix");
        let result = self
            .provider
            .last_known_position()
            .await
            .and_then(|cached| cached.ok_or(LocationError::NotAvailable));

        if let Err(err) = &result {
            debug!("no last known fix: {err}");
        }
        result
    }

    /// The display address for the coordinates, or `None` when the provider
    /// finds nothing, fails, or the coordinates are invalid.
    ///
    /// Needs no permission: the coordinates come from the caller.
    pub async fn get_address(&self, latitude: f64, longitude: f64) -> Option<String> {
        self.address(latitude, longitude).await.ok()
    }

    /// The display address of the best reverse-geocode candidate.
    ///
    /// A best candidate with every field empty counts as a miss, since an
    /// empty string is no more useful to show than no address.
    ///
    /// # Errors
    /// Returns [`LocationError::InvalidCoordinates`] for non-finite or
    /// out-of-range input, [`LocationError::GeocodeMiss`] when there is no
    /// candidate or the best one has no fields, or the provider's error.
    pub async fn address(&self, latitude: f64, longitude: f64) -> LocationResult<String> {
        if !valid_coordinates(latitude, longitude) {
            return Err(LocationError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        debug!("reverse geocoding ({latitude}, {longitude})");
        let result = self
            .provider
            .reverse_geocode(latitude, longitude)
            .await
            .and_then(|candidates| {
                candidates
                    .first()
                    .and_then(|best| AddressComponents::from(best).to_display())
                    .ok_or(LocationError::GeocodeMiss)
            });

        if let Err(err) = &result {
            warn!("reverse geocode failed: {err}");
        }
        result
    }

    /// Great-circle distance in meters. Pure math, no permission needed.
    #[must_use]
    pub fn distance_between(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        crate::distance_between(lat1, lon1, lat2, lon2)
    }
}

fn valid_coordinates(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}
