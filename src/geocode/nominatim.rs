use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, trace, warn};

use crate::config::constant::{GEOCODER_TIMEOUT_SECS, GEOCODER_USER_AGENT};
use crate::domain::types::GeoPoint;
use crate::geocode::Geocoder;

/// Free-text place search against a Nominatim instance.
///
/// Construct once and reuse; the underlying reqwest client pools its
/// connections. Every request carries an explicit timeout so a dead geocoder
/// stalls a lookup, not the whole session.
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(GEOCODER_USER_AGENT)
            .timeout(Duration::from_secs(GEOCODER_TIMEOUT_SECS))
            .build()?;
        Ok(NominatimGeocoder {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, place: &str) -> Option<GeoPoint> {
        if place.trim().is_empty() {
            warn!("resolve called with an empty place name");
            return None;
        }

        let url = format!("{}/search", self.base_url);
        trace!("Sending geocode request to {} for {:?}", url, place);
        let response = match self
            .client
            .get(&url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
        {
            Ok(resp) => {
                let status = resp.status();
                if !status.is_success() {
                    error!(
                        "Geocoder returned HTTP {} for {:?}: {}",
                        status,
                        place,
                        status.canonical_reason().unwrap_or("Unknown")
                    );
                    return None;
                }
                resp
            }
            Err(e) => {
                error!("Geocode request failed for {:?}: {}", place, e);
                return None;
            }
        };

        let results: Vec<SearchResult> = match response.json().await {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to parse geocoder response for {:?}: {}", place, e);
                return None;
            }
        };

        let top = match results.first() {
            Some(top) => top,
            None => {
                debug!("No geocoder match for {:?}", place);
                return None;
            }
        };

        // Nominatim ships coordinates as strings.
        let latitude = top.lat.parse::<f64>().ok()?;
        let longitude = top.lon.parse::<f64>().ok()?;
        debug!(
            "Resolved {:?} to ({}, {}) [{}]",
            place, latitude, longitude, top.display_name
        );
        Some(GeoPoint {
            latitude,
            longitude,
        })
    }
}
