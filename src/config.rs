use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::domain::types::GeoPoint;

pub mod constant {
    /// Depot coordinates (Lagos) used as the origin for time estimation and routing.
    pub const DEPOT_LAT: f64 = 6.5244;
    pub const DEPOT_LON: f64 = 3.3792;

    /// Fixed handling time added to every delivery estimate.
    pub const BASE_HANDLING_MINUTES: f64 = 30.0;
    /// Travel time per kilometre of geodesic distance (~60 km/h road speed).
    pub const MINUTES_PER_KM: f64 = 1.0;

    pub const LOG_FILE: &str = "delivery_logs.json";
    pub const CSV_EXPORT_FILE: &str = "delivery_logs.csv";

    pub const GEOCODER_BASE_URL: &str = "https://nominatim.openstreetmap.org";
    pub const GEOCODER_USER_AGENT: &str = "okadagirl_logistics";
    pub const GEOCODER_TIMEOUT_SECS: u64 = 30;
}

/// Linear delivery-time model: `minutes = floor(base + per_km * distance_km)`.
#[derive(Debug, Clone, Copy)]
pub struct TimeModel {
    pub base_minutes: f64,
    pub minutes_per_km: f64,
}

impl Default for TimeModel {
    fn default() -> Self {
        TimeModel {
            base_minutes: constant::BASE_HANDLING_MINUTES,
            minutes_per_km: constant::MINUTES_PER_KM,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub depot: GeoPoint,
    pub time_model: TimeModel,
    pub log_file: PathBuf,
    pub csv_export_file: PathBuf,
    pub geocoder_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            depot: GeoPoint {
                latitude: constant::DEPOT_LAT,
                longitude: constant::DEPOT_LON,
            },
            time_model: TimeModel::default(),
            log_file: PathBuf::from(constant::LOG_FILE),
            csv_export_file: PathBuf::from(constant::CSV_EXPORT_FILE),
            geocoder_base_url: constant::GEOCODER_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Build the config from the environment, falling back to the named
    /// constants. The depot and time model are business assumptions, so they
    /// stay overridable without a rebuild.
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Some(lat) = read_f64("DEPOT_LAT") {
            config.depot.latitude = lat;
        }
        if let Some(lon) = read_f64("DEPOT_LON") {
            config.depot.longitude = lon;
        }
        if let Some(base) = read_f64("BASE_HANDLING_MINUTES") {
            config.time_model.base_minutes = base;
        }
        if let Some(per_km) = read_f64("MINUTES_PER_KM") {
            config.time_model.minutes_per_km = per_km;
        }
        if let Ok(path) = env::var("LOG_FILE") {
            config.log_file = PathBuf::from(path);
        }
        if let Ok(path) = env::var("CSV_EXPORT_FILE") {
            config.csv_export_file = PathBuf::from(path);
        }
        if let Ok(url) = env::var("GEOCODER_BASE_URL") {
            config.geocoder_base_url = url;
        }

        config
    }
}

fn read_f64(key: &str) -> Option<f64> {
    match env::var(key) {
        Ok(raw) => match raw.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring {}={:?}: not a valid number", key, raw);
                None
            }
        },
        Err(_) => None,
    }
}
