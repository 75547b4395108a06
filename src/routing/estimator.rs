use tracing::debug;

use crate::config::TimeModel;
use crate::domain::types::GeoPoint;
use crate::geocode::Geocoder;
use crate::routing::geodesic::distance_km;

/// Minutes for a known geodesic distance from the depot, under the linear
/// time model. Floored to whole minutes like the original estimate.
pub fn minutes_for_distance(model: &TimeModel, distance_km: f64) -> u32 {
    (model.base_minutes + model.minutes_per_km * distance_km).floor() as u32
}

/// Resolve a destination and estimate its delivery time in minutes.
///
/// `None` means "we don't know" (the destination failed to geocode), not a
/// fault; callers surface it as "Unknown".
pub async fn estimate_minutes(
    geocoder: &dyn Geocoder,
    depot: GeoPoint,
    model: &TimeModel,
    destination: &str,
) -> Option<u32> {
    let point = geocoder.resolve(destination).await?;
    let dist = distance_km(depot, point);
    let minutes = minutes_for_distance(model, dist);
    debug!(
        "{:?} resolved {:.2} km from depot, estimated {} mins",
        destination, dist, minutes
    );
    Some(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::geodesic::EARTH_RADIUS_KM;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct FakeGeocoder(HashMap<String, GeoPoint>);

    #[async_trait]
    impl Geocoder for FakeGeocoder {
        async fn resolve(&self, place: &str) -> Option<GeoPoint> {
            self.0.get(place).copied()
        }
    }

    const DEPOT: GeoPoint = GeoPoint {
        latitude: 6.5244,
        longitude: 3.3792,
    };

    /// A point exactly `km` kilometres due north of `from`.
    fn north_of(from: GeoPoint, km: f64) -> GeoPoint {
        GeoPoint {
            latitude: from.latitude + (km / EARTH_RADIUS_KM).to_degrees(),
            longitude: from.longitude,
        }
    }

    #[tokio::test]
    async fn ten_km_out_estimates_forty_minutes() {
        let mut places = HashMap::new();
        places.insert("Ajah".to_string(), north_of(DEPOT, 10.0));
        let geocoder = FakeGeocoder(places);

        let minutes =
            estimate_minutes(&geocoder, DEPOT, &TimeModel::default(), "Ajah").await;
        assert_eq!(minutes, Some(40));
    }

    #[tokio::test]
    async fn unresolvable_destination_estimates_unknown() {
        let geocoder = FakeGeocoder(HashMap::new());
        let minutes =
            estimate_minutes(&geocoder, DEPOT, &TimeModel::default(), "Nowhere").await;
        assert_eq!(minutes, None);
    }

    #[tokio::test]
    async fn estimate_is_monotonic_in_distance() {
        let mut places = HashMap::new();
        for km in [1.0, 5.0, 25.0, 120.0] {
            places.insert(format!("{} km out", km), north_of(DEPOT, km));
        }
        let geocoder = FakeGeocoder(places);

        let model = TimeModel::default();
        let mut previous = 0;
        for km in [1.0, 5.0, 25.0, 120.0] {
            let minutes = estimate_minutes(&geocoder, DEPOT, &model, &format!("{} km out", km))
                .await
                .unwrap();
            assert!(minutes >= previous, "{} < {} at {} km", minutes, previous, km);
            previous = minutes;
        }
    }

    #[test]
    fn base_minutes_apply_at_zero_distance() {
        assert_eq!(minutes_for_distance(&TimeModel::default(), 0.0), 30);
        assert_eq!(minutes_for_distance(&TimeModel::default(), 10.4), 40);
    }
}
