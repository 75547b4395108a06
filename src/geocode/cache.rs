use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::database::sqlite;
use crate::domain::types::GeoPoint;
use crate::geocode::{normalize_place, Geocoder};

/// Memoizing wrapper around a live geocoder.
///
/// Hits are served from an in-session map keyed on normalized place text, so
/// repeated queries for the same destination cost one network call per run.
/// With a SQLite pool attached, successful resolutions also persist across
/// runs. Failures are memoized for the session only, never persisted, so a
/// transient outage does not poison the cache.
pub struct CachedGeocoder<G> {
    inner: G,
    pool: Option<SqlitePool>,
    memo: Mutex<HashMap<String, Option<GeoPoint>>>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    pub fn new(inner: G, pool: Option<SqlitePool>) -> Self {
        CachedGeocoder {
            inner,
            pool,
            memo: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    async fn resolve(&self, place: &str) -> Option<GeoPoint> {
        let key = normalize_place(place);

        if let Some(cached) = self.memo.lock().await.get(&key) {
            debug!("Geocode cache hit for {:?}", key);
            return *cached;
        }

        if let Some(pool) = &self.pool {
            match sqlite::lookup_geocode(pool, &key).await {
                Ok(Some(point)) => {
                    debug!("Geocode found in SQLite cache for {:?}", key);
                    self.memo.lock().await.insert(key, Some(point));
                    return Some(point);
                }
                Ok(None) => {}
                Err(e) => warn!("SQLite geocode lookup failed for {:?}: {}", key, e),
            }
        }

        let resolved = self.inner.resolve(place).await;

        if let (Some(point), Some(pool)) = (resolved, &self.pool) {
            if let Err(e) = sqlite::store_geocode(pool, &key, point).await {
                warn!("Failed to persist geocode for {:?}: {}", key, e);
            }
        }

        self.memo.lock().await.insert(key, resolved);
        resolved
    }
}
