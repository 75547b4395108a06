use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::types::DeliveryRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file exists but does not parse. Deliberately loud rather than
    /// silently treated as an empty log, so a corrupted store cannot be
    /// clobbered by the next append.
    #[error("log file {path} exists but is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Flat-file JSON log of delivery records.
///
/// Every operation reads the whole collection; every mutation rewrites it
/// wholesale. There is no partial-write durability and concurrent writers are
/// out of scope; this matches the single-operator usage the tool is built for.
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LogStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection. A missing file is a benign empty log.
    pub fn load(&self) -> Result<Vec<DeliveryRecord>, StoreError> {
        if !self.path.exists() {
            debug!("Log file {:?} absent, treating as empty log", self.path);
            return Ok(vec![]);
        }

        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let logs = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        Ok(logs)
    }

    /// Overwrite the store with the given collection.
    pub fn save(&self, logs: &[DeliveryRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(logs).expect("delivery records serialize cleanly");
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("Wrote {} records to {:?}", logs.len(), self.path);
        Ok(())
    }

    /// Append one record: full read, push, full rewrite.
    pub fn append(&self, record: DeliveryRecord) -> Result<(), StoreError> {
        let mut logs = self.load()?;
        logs.push(record);
        self.save(&logs)?;
        info!("Appended delivery log ({} total)", logs.len());
        Ok(())
    }

    /// Records whose customer or date contains the keyword, case-insensitive.
    pub fn filter(&self, keyword: &str) -> Result<Vec<DeliveryRecord>, StoreError> {
        let keyword = keyword.to_lowercase();
        let logs = self.load()?;
        Ok(logs
            .into_iter()
            .filter(|log| {
                log.customer.to_lowercase().contains(&keyword)
                    || log.date.to_lowercase().contains(&keyword)
            })
            .collect())
    }
}
