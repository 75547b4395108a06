use crate::domain::types::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres (haversine over a spherical Earth).
/// Planar Euclidean distance would misorder stops near the poles or across
/// large longitude spans, so every distance in the crate goes through here.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    #[test]
    fn zero_distance_for_identical_points() {
        let lagos = point(6.5244, 3.3792);
        assert!(distance_km(lagos, lagos).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = point(6.5244, 3.3792);
        let b = point(6.4531, 3.3958);
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = point(0.0, 0.0);
        let b = point(1.0, 0.0);
        let d = distance_km(a, b);
        assert!((d - 111.19).abs() < 0.5, "got {}", d);
    }

    #[test]
    fn longitude_spans_shrink_away_from_the_equator() {
        let equator = distance_km(point(0.0, 0.0), point(0.0, 1.0));
        let high_lat = distance_km(point(60.0, 0.0), point(60.0, 1.0));
        assert!(high_lat < equator / 1.9, "{} vs {}", high_lat, equator);
    }
}
