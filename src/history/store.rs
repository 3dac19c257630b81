//! History stores: in-memory and JSON-file backed

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{GameError, Result};
use crate::history::record::HistoryRecord;

/// Append-only log of finished campaigns
pub trait HistoryStore {
    fn append(&mut self, record: HistoryRecord);
    fn records(&self) -> &[HistoryRecord];
}

/// Volatile store, used by tests and the simulator
#[derive(Default)]
pub struct MemoryHistory {
    records: Vec<HistoryRecord>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    fn records(&self) -> &[HistoryRecord] {
        &self.records
    }
}

/// Store backed by a JSON array on disk
///
/// Loading a missing, empty, or malformed file yields an empty history with
/// a warning; a failed save is logged and dropped. Neither is ever fatal to
/// a running campaign.
pub struct JsonFileHistory {
    path: PathBuf,
    records: Vec<HistoryRecord>,
}

impl JsonFileHistory {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match read_records(&path) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    "failed to load game history from {}: {}",
                    path.display(),
                    err
                );
                Vec::new()
            }
        };
        Self { path, records }
    }

    /// Write the current records back to disk, downgrading failures to a
    /// warning
    pub fn save(&self) {
        if let Err(err) = self.write_records() {
            tracing::warn!(
                "failed to write game history to {}: {}",
                self.path.display(),
                err
            );
        }
    }

    fn write_records(&self) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl HistoryStore for JsonFileHistory {
    fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    fn records(&self) -> &[HistoryRecord] {
        &self.records
    }
}

fn read_records(path: &Path) -> Result<Vec<HistoryRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value = serde_json::from_str(&data)?;
    if !value.is_array() {
        return Err(GameError::InvalidHistoryData(
            "expected a JSON array of records".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}
