//! Windows location implementation using WinRT Geolocator.

use std::time::Duration;

use windows::Devices::Geolocation::{Geolocator, PositionAccuracy, PositionStatus};
use windows::Foundation::TimeSpan;

use crate::{LocationAccuracy, LocationError, LocationResult, Position};

/// 100ns ticks between 1601-01-01 (WinRT `DateTime` epoch) and the Unix epoch.
const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;
const TICKS_PER_MILLI: i64 = 10_000;

fn win_error(err: &windows::core::Error) -> LocationError {
    LocationError::Provider(err.message().to_string())
}

pub(crate) async fn service_enabled() -> LocationResult<bool> {
    let geolocator = Geolocator::new().map_err(|e| win_error(&e))?;
    let status = geolocator.LocationStatus().map_err(|e| win_error(&e))?;
    Ok(status != PositionStatus::Disabled && status != PositionStatus::NotAvailable)
}

pub(crate) async fn current_position(
    accuracy: LocationAccuracy,
    timeout: Duration,
) -> LocationResult<Position> {
    let geolocator = Geolocator::new().map_err(|e| win_error(&e))?;

    let desired = match accuracy {
        LocationAccuracy::High | LocationAccuracy::Best => PositionAccuracy::High,
        LocationAccuracy::Lowest | LocationAccuracy::Low | LocationAccuracy::Medium => {
            PositionAccuracy::Default
        }
    };
    geolocator
        .SetDesiredAccuracy(desired)
        .map_err(|e| win_error(&e))?;

    // A zero maximum age forces a fresh fix instead of the OS cache. Awaiting
    // the operation keeps the executor free and lets the gateway timer drop it.
    let position = geolocator
        .GetGeopositionAsyncWithAgeAndTimeout(TimeSpan::default(), TimeSpan::from(timeout))
        .map_err(|e| win_error(&e))?
        .await
        .map_err(|e| win_error(&e))?;

    let coord = position.Coordinate().map_err(|e| win_error(&e))?;
    let point = coord
        .Point()
        .map_err(|e| win_error(&e))?
        .Position()
        .map_err(|e| win_error(&e))?;

    let ticks = coord
        .Timestamp()
        .map_err(|e| win_error(&e))?
        .UniversalTime;
    let timestamp = u64::try_from((ticks - UNIX_EPOCH_TICKS) / TICKS_PER_MILLI).unwrap_or(0);

    Ok(Position {
        latitude: point.Latitude,
        longitude: point.Longitude,
        accuracy: coord.Accuracy().ok(),
        altitude: Some(point.Altitude),
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>(_: &T) {}

    #[test]
    fn fix_future_can_move_between_executor_threads() {
        let fix = current_position(LocationAccuracy::High, Duration::from_secs(1));
        assert_send(&fix);
    }
}
