//! Stock level handling for surplus prediction

use crate::error::{Result, SurplusError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// One stock row as stored in a stock CSV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Item (medicine) identifier
    pub item_id: String,
    /// Units currently on hand; must be finite and non-negative
    pub on_hand: f64,
}

/// Current stock on hand per item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockLevels {
    levels: BTreeMap<String, f64>,
}

impl StockLevels {
    /// Build stock levels from raw records, validating quantities.
    pub fn from_records(records: Vec<StockRecord>) -> Result<Self> {
        let mut levels = BTreeMap::new();
        for record in records {
            if !record.on_hand.is_finite() || record.on_hand < 0.0 {
                return Err(SurplusError::StockError(format!(
                    "Invalid on-hand quantity {} for item '{}'",
                    record.on_hand, record.item_id
                )));
            }
            // Duplicate rows accumulate, matching how partial deliveries are filed
            *levels.entry(record.item_id).or_insert(0.0) += record.on_hand;
        }
        Ok(Self { levels })
    }

    /// Load stock levels from a CSV file with `item_id,on_hand` columns.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in reader.deserialize::<StockRecord>() {
            records.push(row?);
        }
        Self::from_records(records)
    }

    /// Units on hand for an item; items never stocked count as zero.
    pub fn on_hand(&self, item_id: &str) -> f64 {
        self.levels.get(item_id).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Source of current stock levels, the predictor's external collaborator.
pub trait StockSource: Debug + Send + Sync {
    /// Load the current stock levels.
    fn load(&self) -> Result<StockLevels>;
}

/// Stock source backed by a CSV file.
#[derive(Debug, Clone)]
pub struct CsvStockSource {
    path: PathBuf,
}

impl CsvStockSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl StockSource for CsvStockSource {
    fn load(&self) -> Result<StockLevels> {
        StockLevels::from_csv(&self.path)
    }
}

/// In-memory stock source, for tests and embedded data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStock {
    records: Vec<StockRecord>,
}

impl InMemoryStock {
    pub fn new(levels: Vec<(&str, f64)>) -> Self {
        Self {
            records: levels
                .into_iter()
                .map(|(item_id, on_hand)| StockRecord {
                    item_id: item_id.to_string(),
                    on_hand,
                })
                .collect(),
        }
    }
}

impl StockSource for InMemoryStock {
    fn load(&self) -> Result<StockLevels> {
        StockLevels::from_records(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_rows_accumulate() {
        let levels = StockLevels::from_records(vec![
            StockRecord {
                item_id: "amoxicillin".to_string(),
                on_hand: 10.0,
            },
            StockRecord {
                item_id: "amoxicillin".to_string(),
                on_hand: 5.0,
            },
        ])
        .unwrap();

        assert_eq!(levels.on_hand("amoxicillin"), 15.0);
    }

    #[test]
    fn test_unknown_item_counts_as_zero() {
        let levels = StockLevels::default();
        assert_eq!(levels.on_hand("ibuprofen"), 0.0);
    }

    #[test]
    fn test_rejects_negative_on_hand() {
        let result = StockLevels::from_records(vec![StockRecord {
            item_id: "amoxicillin".to_string(),
            on_hand: -3.0,
        }]);
        assert!(matches!(result, Err(SurplusError::StockError(_))));
    }
}
