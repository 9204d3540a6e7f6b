//! Great-circle distance between coordinates.

use storefind_core::Coordinate;

const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance between two coordinates, in miles.
///
/// Pure and total: always returns a non-negative finite value for finite
/// inputs. Callers surfacing the value externally round it with
/// [`round_to_tenth`].
#[must_use]
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Round to one decimal place, the precision used everywhere a distance
/// is externally visible.
#[must_use]
pub fn round_to_tenth(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        let st_louis = coord(38.6270, -90.1994);
        assert!(distance_miles(st_louis, st_louis).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = coord(38.6270, -90.1994);
        let b = coord(41.8781, -87.6298);
        let ab = distance_miles(a, b);
        let ba = distance_miles(b, a);
        assert!((ab - ba).abs() < 1e-9, "ab={ab} ba={ba}");
    }

    #[test]
    fn st_louis_to_chicago_is_about_260_miles() {
        let st_louis = coord(38.6270, -90.1994);
        let chicago = coord(41.8781, -87.6298);
        let miles = distance_miles(st_louis, chicago);
        assert!((250.0..270.0).contains(&miles), "got {miles}");
    }

    #[test]
    fn small_offsets_produce_small_distances() {
        let origin = coord(38.6270, -90.1994);
        let nearby = coord(38.6280, -90.2004);
        let miles = distance_miles(origin, nearby);
        assert!(miles > 0.0 && miles < 0.2, "got {miles}");
    }

    #[test]
    fn round_to_tenth_rounds_half_up() {
        assert!((round_to_tenth(1.25) - 1.3).abs() < 1e-9);
        assert!((round_to_tenth(1.24) - 1.2).abs() < 1e-9);
        assert!((round_to_tenth(0.0) - 0.0).abs() < 1e-9);
    }
}
