/// Equatorial Earth radius (WGS-84 semi-major axis) in meters.
///
/// Mobile geolocation plugins use this radius for their haversine distance,
/// so results line up with theirs.
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Great-circle distance between two coordinates, in meters.
///
/// Uses the haversine formula on a sphere of [`EARTH_RADIUS_METERS`].
/// Identical points give exactly `0.0` and swapping the two points gives the
/// same result bit for bit. Needs no permission and never fails.
#[must_use]
pub fn distance_between(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    // abs() keeps the result independent of argument order
    let d_lat = (lat2 - lat1).abs().to_radians();
    let d_lon = (lon2 - lon1).abs().to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // rounding can push `a` a hair past 1 for antipodal points
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_METERS * c
}
