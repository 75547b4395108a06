use std::error::Error;
use std::str::FromStr;

use chrono::Utc;
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tracing::info;

use crate::domain::types::GeoPoint;

/// Open (or create) the SQLite database backing the geocode cache.
pub async fn db_connection() -> Result<SqlitePool, Box<dyn Error>> {
    dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::warn!("DATABASE_URL not set, using default SQLite file");
        "sqlite:okada_cache.sqlite".to_string()
    });

    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;
    info!("Connected to SQLite database at {database_url}");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS geocode_cache (
            place TEXT PRIMARY KEY,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            resolved_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}

/// Look up a previously resolved place. `place` is expected to be normalized
/// by the caller (the cache layer owns the keying rule).
pub async fn lookup_geocode(
    pool: &SqlitePool,
    place: &str,
) -> Result<Option<GeoPoint>, sqlx::Error> {
    let row: Option<(f64, f64)> =
        sqlx::query_as("SELECT latitude, longitude FROM geocode_cache WHERE place = ?")
            .bind(place)
            .fetch_optional(pool)
            .await?;
    Ok(row.map(|(latitude, longitude)| GeoPoint {
        latitude,
        longitude,
    }))
}

/// Persist a successful resolution, replacing any stale entry for the place.
pub async fn store_geocode(
    pool: &SqlitePool,
    place: &str,
    point: GeoPoint,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT OR REPLACE INTO geocode_cache (place, latitude, longitude, resolved_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(place)
    .bind(point.latitude)
    .bind(point.longitude)
    .bind(Utc::now().timestamp())
    .execute(pool)
    .await?;
    Ok(())
}
