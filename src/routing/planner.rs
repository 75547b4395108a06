use tracing::debug;

use crate::domain::types::{GeoPoint, RouteStop};
use crate::routing::geodesic::distance_km;

/// Order stops into a visiting sequence by greedy nearest-neighbor selection
/// starting from the depot. Returns labels only.
///
/// Ties on distance go to the stop that appears earlier in the input, so the
/// output is deterministic for a fixed input order. The result is a
/// permutation of the input labels and is NOT guaranteed globally optimal;
/// the greedy heuristic is the contract, not an approximation of one.
///
/// O(n²) distance evaluations. Fine for a hand-kept delivery log; a spatial
/// index would be needed before this sees hundreds of stops.
pub fn plan_route(depot: GeoPoint, stops: &[RouteStop]) -> Vec<String> {
    let mut remaining: Vec<RouteStop> = stops.to_vec();
    let mut route: Vec<String> = Vec::with_capacity(remaining.len());
    let mut current = depot;

    while !remaining.is_empty() {
        // Strict < keeps the first occurrence on equal distances.
        let mut best_idx = 0;
        let mut best_dist = distance_km(current, remaining[0].point);
        for (idx, stop) in remaining.iter().enumerate().skip(1) {
            let dist = distance_km(current, stop.point);
            if dist < best_dist {
                best_idx = idx;
                best_dist = dist;
            }
        }

        let chosen = remaining.remove(best_idx);
        debug!(
            "next stop {:?} at {:.2} km from current position",
            chosen.label, best_dist
        );
        current = chosen.point;
        route.push(chosen.label);
    }

    route
}
