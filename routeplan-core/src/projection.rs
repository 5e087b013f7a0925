//! Conversion between the planning projection (EPSG:3857, Web Mercator)
//! and geographic WGS84 lon/lat degrees.
//!
//! Link coordinates and query points arrive in Web Mercator meters; metric
//! buffering in [`crate::locate`] is only correct on the geographic frame,
//! so the locator round-trips through these helpers.

use std::f64::consts::{FRAC_PI_2, PI};

use geo::Point;

/// WGS84 semi-major axis, the sphere radius used by spherical Mercator.
const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Projects a WGS84 lon/lat point (degrees) to EPSG:3857 meters.
pub fn from_lon_lat(point: Point<f64>) -> Point<f64> {
    let x = point.x().to_radians() * EARTH_RADIUS_M;
    let y = (FRAC_PI_2 / 2.0 + point.y().to_radians() / 2.0).tan().ln() * EARTH_RADIUS_M;
    Point::new(x, y)
}

/// Projects an EPSG:3857 point (meters) back to WGS84 lon/lat degrees.
pub fn to_lon_lat(point: Point<f64>) -> Point<f64> {
    let lon = (point.x() / EARTH_RADIUS_M).to_degrees();
    let lat = (2.0 * (point.y() / EARTH_RADIUS_M).exp().atan() - FRAC_PI_2).to_degrees();
    Point::new(lon, lat)
}

/// Mercator stretches ground distance by `1 / cos(lat)`; this is the planar
/// length of `meters` of ground distance at latitude `lat_deg`.
pub(crate) fn planar_length(meters: f64, lat_deg: f64) -> f64 {
    // Clamp away from the poles where the projection degenerates.
    let lat = lat_deg.to_radians().abs().min(PI / 2.0 - 1e-6);
    meters / lat.cos()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geo::Point;

    use super::*;

    #[test]
    fn round_trip_is_identity() {
        let geographic = Point::new(30.3, 59.9);
        let planar = from_lon_lat(geographic);
        let back = to_lon_lat(planar);

        assert_relative_eq!(back.x(), geographic.x(), epsilon = 1e-9);
        assert_relative_eq!(back.y(), geographic.y(), epsilon = 1e-9);
    }

    #[test]
    fn equator_maps_to_zero_y() {
        let planar = from_lon_lat(Point::new(10.0, 0.0));
        assert_relative_eq!(planar.y(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn planar_length_grows_with_latitude() {
        let at_equator = planar_length(100.0, 0.0);
        let at_sixty = planar_length(100.0, 60.0);

        assert_relative_eq!(at_equator, 100.0, epsilon = 1e-9);
        // cos(60 deg) = 0.5, so ground meters double on the plane
        assert_relative_eq!(at_sixty, 200.0, epsilon = 1e-6);
    }
}
