use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A resolved latitude/longitude pair. Absence of a `GeoPoint` means the
/// destination is unknown; it is never defaulted to (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A destination label paired with its resolved coordinates, consumed by the
/// route planner. The coordinates stay planning-internal; only labels come
/// back out.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStop {
    pub label: String,
    pub point: GeoPoint,
}

impl RouteStop {
    pub fn new(label: impl Into<String>, point: GeoPoint) -> Self {
        RouteStop {
            label: label.into(),
            point,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    #[serde(rename = "delivered")]
    Delivered,
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "not delivered")]
    NotDelivered,
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::NotDelivered => "not delivered",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DeliveryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delivered" => Ok(DeliveryStatus::Delivered),
            "pending" => Ok(DeliveryStatus::Pending),
            "not delivered" | "not_delivered" => Ok(DeliveryStatus::NotDelivered),
            other => Err(format!("unknown delivery status: {:?}", other)),
        }
    }
}

/// Three-way feedback polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        };
        write!(f, "{}", s)
    }
}

/// One logged delivery. Records are append-only and immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub customer: String,
    pub destination: String,
    pub status: DeliveryStatus,
    pub feedback: String,
    pub sentiment: Sentiment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_delivery_minutes: Option<u32>,
}

impl DeliveryRecord {
    /// "40 mins" or "Unknown", for display and export.
    pub fn predicted_time_label(&self) -> String {
        match self.predicted_delivery_minutes {
            Some(minutes) => format!("{} mins", minutes),
            None => "Unknown".to_string(),
        }
    }
}
