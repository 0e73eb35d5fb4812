//! Historical usage data handling for forecasting

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A calendar month, the forecasting granularity of this crate.
///
/// Ordered chronologically and rendered as `YYYY-MM` everywhere it crosses a
/// serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a new period. The month must be in `1..=12`.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidParameter(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The period a date falls into.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The next calendar month.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of year, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = s.split_once('-').ok_or_else(|| {
            ForecastError::ParseError(format!("Invalid period '{}', expected YYYY-MM", s))
        })?;
        Period::new(year.parse()?, month.parse()?)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A single historical usage observation for one item.
///
/// Records are immutable once loaded into a [`DemandHistory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Item (medicine) identifier
    pub item_id: String,
    /// Date the usage was recorded
    pub date: NaiveDate,
    /// Quantity used; must be finite and non-negative
    pub quantity: f64,
}

impl UsageRecord {
    pub fn new(item_id: impl Into<String>, date: NaiveDate, quantity: f64) -> Self {
        Self {
            item_id: item_id.into(),
            date,
            quantity,
        }
    }

    /// The calendar month this record falls into.
    pub fn period(&self) -> Period {
        Period::from_date(self.date)
    }
}

/// Ordered monthly usage totals for a single item.
///
/// Months with no recorded usage between the first and last observation are
/// present with a zero total, so the sequence is contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    points: Vec<(Period, f64)>,
}

impl MonthlySeries {
    /// Build a series from per-month totals, filling interior gaps with zero.
    pub fn from_totals(totals: BTreeMap<Period, f64>) -> Self {
        let mut points = Vec::with_capacity(totals.len());
        let mut expected: Option<Period> = None;

        for (period, total) in totals {
            if let Some(mut cursor) = expected {
                while cursor < period {
                    points.push((cursor, 0.0));
                    cursor = cursor.next();
                }
            }
            points.push((period, total));
            expected = Some(period.next());
        }

        Self { points }
    }

    pub fn points(&self) -> &[(Period, f64)] {
        &self.points
    }

    /// Monthly totals in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    /// The most recent period in the series, if any.
    pub fn last_period(&self) -> Option<Period> {
        self.points.last().map(|(p, _)| *p)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean of the monthly totals.
    pub fn mean(&self) -> Result<f64> {
        if self.points.is_empty() {
            return Err(ForecastError::DataError(
                "No monthly totals available".to_string(),
            ));
        }
        let sum: f64 = self.points.iter().map(|(_, v)| v).sum();
        Ok(sum / self.points.len() as f64)
    }
}

/// Validated collection of historical usage records, grouped per item.
#[derive(Debug, Clone, Default)]
pub struct DemandHistory {
    records: BTreeMap<String, Vec<UsageRecord>>,
}

impl DemandHistory {
    /// Build a history from raw records, validating quantities.
    ///
    /// Records are grouped per item and sorted by date. A non-finite or
    /// negative quantity rejects the whole batch.
    pub fn from_records(records: Vec<UsageRecord>) -> Result<Self> {
        let mut grouped: BTreeMap<String, Vec<UsageRecord>> = BTreeMap::new();

        for record in records {
            if !record.quantity.is_finite() || record.quantity < 0.0 {
                return Err(ForecastError::DataError(format!(
                    "Invalid quantity {} for item '{}' on {}",
                    record.quantity, record.item_id, record.date
                )));
            }
            grouped.entry(record.item_id.clone()).or_default().push(record);
        }

        for item_records in grouped.values_mut() {
            item_records.sort_by_key(|r| r.date);
        }

        Ok(Self { records: grouped })
    }

    /// Load a history from a CSV file with `item_id,date,quantity` columns.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in reader.deserialize::<UsageRecord>() {
            records.push(row?);
        }
        Self::from_records(records)
    }

    /// Identifiers of all items with at least one record.
    pub fn item_ids(&self) -> BTreeSet<String> {
        self.records.keys().cloned().collect()
    }

    /// All records for one item, sorted by date.
    pub fn records_for(&self, item_id: &str) -> Option<&[UsageRecord]> {
        self.records.get(item_id).map(Vec::as_slice)
    }

    /// Monthly usage totals for one item, gap months filled with zero.
    pub fn monthly_series(&self, item_id: &str) -> Option<MonthlySeries> {
        let records = self.records.get(item_id)?;
        let mut totals: BTreeMap<Period, f64> = BTreeMap::new();
        for record in records {
            *totals.entry(record.period()).or_insert(0.0) += record.quantity;
        }
        Some(MonthlySeries::from_totals(totals))
    }

    /// Total number of records across all items.
    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_period_ordering_and_next() {
        let dec = Period::new(2023, 12).unwrap();
        let jan = Period::new(2024, 1).unwrap();
        assert!(dec < jan);
        assert_eq!(dec.next(), jan);
    }

    #[test]
    fn test_period_round_trip() {
        let period: Period = "2024-03".parse().unwrap();
        assert_eq!(period.to_string(), "2024-03");
        assert!("2024-13".parse::<Period>().is_err());
        assert!("202403".parse::<Period>().is_err());
    }

    #[test]
    fn test_monthly_series_fills_gaps() {
        let history = DemandHistory::from_records(vec![
            UsageRecord::new("ibuprofen", date("2024-01-10"), 5.0),
            UsageRecord::new("ibuprofen", date("2024-01-20"), 3.0),
            UsageRecord::new("ibuprofen", date("2024-04-02"), 4.0),
        ])
        .unwrap();

        let series = history.monthly_series("ibuprofen").unwrap();
        assert_eq!(series.len(), 4);
        assert_eq!(series.values(), vec![8.0, 0.0, 0.0, 4.0]);
        assert_eq!(series.last_period().unwrap().to_string(), "2024-04");
    }

    #[test]
    fn test_rejects_invalid_quantity() {
        let result = DemandHistory::from_records(vec![UsageRecord::new(
            "ibuprofen",
            date("2024-01-10"),
            -1.0,
        )]);
        assert!(matches!(result, Err(ForecastError::DataError(_))));
    }
}
