use itertools::Itertools;

use crate::domain::types::{DeliveryRecord, DeliveryStatus, Sentiment};

/// Aggregate counts over the full log collection.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliverySummary {
    pub total: usize,
    pub delivered: usize,
    pub pending: usize,
    pub not_delivered: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub average_rating: Option<f64>,
}

pub fn summarize(logs: &[DeliveryRecord]) -> DeliverySummary {
    let status_counts = logs.iter().counts_by(|log| log.status);
    let sentiment_counts = logs.iter().counts_by(|log| log.sentiment);

    let ratings: Vec<u8> = logs.iter().filter_map(|log| log.rating).collect();
    let average_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().map(|&r| r as f64).sum::<f64>() / ratings.len() as f64)
    };

    DeliverySummary {
        total: logs.len(),
        delivered: *status_counts.get(&DeliveryStatus::Delivered).unwrap_or(&0),
        pending: *status_counts.get(&DeliveryStatus::Pending).unwrap_or(&0),
        not_delivered: *status_counts
            .get(&DeliveryStatus::NotDelivered)
            .unwrap_or(&0),
        positive: *sentiment_counts.get(&Sentiment::Positive).unwrap_or(&0),
        negative: *sentiment_counts.get(&Sentiment::Negative).unwrap_or(&0),
        neutral: *sentiment_counts.get(&Sentiment::Neutral).unwrap_or(&0),
        average_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: DeliveryStatus, sentiment: Sentiment, rating: Option<u8>) -> DeliveryRecord {
        DeliveryRecord {
            customer: "c".to_string(),
            destination: "d".to_string(),
            status,
            feedback: "f".to_string(),
            sentiment,
            rating,
            date: "2026-08-31 09:00".to_string(),
            predicted_delivery_minutes: None,
        }
    }

    #[test]
    fn empty_log_summarizes_to_zeroes() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.delivered, 0);
        assert_eq!(summary.average_rating, None);
    }

    #[test]
    fn counts_statuses_sentiments_and_ratings() {
        let logs = vec![
            record(DeliveryStatus::Delivered, Sentiment::Positive, Some(5)),
            record(DeliveryStatus::Delivered, Sentiment::Neutral, None),
            record(DeliveryStatus::Pending, Sentiment::Negative, Some(1)),
            record(DeliveryStatus::NotDelivered, Sentiment::Negative, Some(3)),
        ];
        let summary = summarize(&logs);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.delivered, 2);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.not_delivered, 1);
        assert_eq!(summary.positive, 1);
        assert_eq!(summary.negative, 2);
        assert_eq!(summary.neutral, 1);
        assert_eq!(summary.average_rating, Some(3.0));
    }
}
