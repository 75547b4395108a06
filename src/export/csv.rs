use std::error::Error;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::domain::types::DeliveryRecord;

/// Render the full log collection to a flat CSV file. Pure projection, no
/// core logic; quoting is left to the csv writer.
pub fn export_to_csv(logs: &[DeliveryRecord], path: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "Date",
        "Customer",
        "Destination",
        "Status",
        "Feedback",
        "Sentiment",
        "Rating",
        "Predicted_Delivery_Time",
    ])?;

    for log in logs {
        let rating = log
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        wtr.write_record([
            log.date.as_str(),
            log.customer.as_str(),
            log.destination.as_str(),
            &log.status.to_string(),
            log.feedback.as_str(),
            &log.sentiment.to_string(),
            &rating,
            &log.predicted_time_label(),
        ])?;
    }

    wtr.flush()?;
    info!("Exported {} records to {:?}", logs.len(), path);
    Ok(())
}
