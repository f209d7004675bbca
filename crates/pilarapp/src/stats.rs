//! # Statistics
//!
//! Dashboard counters derived from the scan history. Counts are recomputed
//! from [`ScanHistory::get_all`] on every call; nothing is cached or updated
//! incrementally, so they can never drift from the stored records.
//!
//! Bucketing follows [`CategoryBucket::of`]: a category containing
//! "anorganik" is inorganic, otherwise one containing "organik" is organic.
//! Everything else (e.g. "B3") counts toward `total` only, so
//! `organic_count + inorganic_count` may be less than `total`.

use crate::model::{CategoryBucket, ScanRecord};
use crate::store::ScanHistory;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub total: usize,
    pub organic_count: usize,
    pub inorganic_count: usize,
}

impl ScanStats {
    pub fn from_records(records: &[ScanRecord]) -> Self {
        let mut stats = ScanStats {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            match record.bucket() {
                CategoryBucket::Organic => stats.organic_count += 1,
                CategoryBucket::Inorganic => stats.inorganic_count += 1,
                CategoryBucket::Hazardous | CategoryBucket::Other => {}
            }
        }
        stats
    }

    /// Records counted in neither bucket.
    pub fn other_count(&self) -> usize {
        self.total - self.organic_count - self.inorganic_count
    }

    /// Organic records as a percentage of all records; 0 for an empty history.
    pub fn organic_share(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.organic_count as f64 * 100.0 / self.total as f64
        }
    }
}

/// Computes [`ScanStats`] over a history store.
pub struct StatisticsAggregator<'a, S: ScanHistory> {
    store: &'a S,
}

impl<'a, S: ScanHistory> StatisticsAggregator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn compute(&self) -> ScanStats {
        ScanStats::from_records(&self.store.get_all())
    }
}
