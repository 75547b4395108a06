pub mod cache;
pub mod nominatim;

use async_trait::async_trait;

use crate::domain::types::GeoPoint;

/// Capability boundary for place-name resolution. The live implementation
/// talks to Nominatim; tests plug in deterministic fakes.
///
/// `resolve` never fails loudly: ambiguous input, no match, and transport
/// errors all come back as `None` and the caller decides how to degrade.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, place: &str) -> Option<GeoPoint>;
}

/// Cache/memoization key for a free-text place name.
pub fn normalize_place(place: &str) -> String {
    place.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_place("  Ikeja, Lagos "), "ikeja, lagos");
        assert_eq!(normalize_place("YABA"), "yaba");
    }
}
