use super::backend::KeyValueBackend;
use super::ScanHistory;
use crate::error::{PilarError, Result};
use crate::model::ScanRecord;
use tracing::{debug, warn};

/// Default storage key for the history blob.
pub const HISTORY_KEY: &str = "scan_history";

/// Default retention cap.
pub const MAX_RETAINED: usize = 50;

pub struct ScanRecordStore<B: KeyValueBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    key: String,
    max_retained: usize,
}

impl<B: KeyValueBackend> ScanRecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key: HISTORY_KEY.to_string(),
            max_retained: MAX_RETAINED,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// A cap of zero is raised to one; a save must keep at least the new record.
    pub fn with_max_retained(mut self, max_retained: usize) -> Self {
        self.max_retained = max_retained.max(1);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn max_retained(&self) -> usize {
        self.max_retained
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Strict read: missing blob is empty, anything else that goes wrong is an error.
    fn load(&self) -> Result<Vec<ScanRecord>> {
        match self.backend.get_item(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str(&raw)?),
        }
    }

    /// Read for a read-modify-write cycle.
    /// A corrupt blob is replaced by the write that follows, but an I/O failure
    /// aborts the mutation so a transient error cannot wipe the history.
    fn load_for_update(&self) -> Result<Vec<ScanRecord>> {
        match self.load() {
            Err(PilarError::Serialization(e)) => {
                warn!(key = %self.key, error = %e, "discarding unreadable scan history");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn write(&self, records: &[ScanRecord]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.backend.set_item(&self.key, &raw)
    }

    fn try_save(&self, record: &ScanRecord) -> Result<()> {
        let mut records = self.load_for_update()?;
        records.insert(0, record.clone());
        if records.len() > self.max_retained {
            let evicted = records.len() - self.max_retained;
            records.truncate(self.max_retained);
            debug!(evicted, cap = self.max_retained, "evicted oldest scan records");
        }
        self.write(&records)
    }

    fn try_delete(&self, id: &str) -> Result<()> {
        let mut records = self.load_for_update()?;
        match records.iter().position(|r| r.id == id) {
            Some(pos) => {
                records.remove(pos);
                self.write(&records)
            }
            None => {
                debug!(id, "delete: no scan record with this id");
                Ok(())
            }
        }
    }
}

impl<B: KeyValueBackend> ScanHistory for ScanRecordStore<B> {
    fn get_all(&self) -> Vec<ScanRecord> {
        self.load().unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "failed to read scan history, treating as empty");
            Vec::new()
        })
    }

    fn save(&self, record: &ScanRecord) -> bool {
        match self.try_save(record) {
            Ok(()) => true,
            Err(e) => {
                warn!(id = %record.id, error = %e, "failed to save scan record");
                false
            }
        }
    }

    fn delete(&self, id: &str) -> bool {
        match self.try_delete(id) {
            Ok(()) => true,
            Err(e) => {
                warn!(id, error = %e, "failed to delete scan record");
                false
            }
        }
    }

    fn clear(&self) -> bool {
        match self.backend.remove_item(&self.key) {
            Ok(()) => true,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to clear scan history");
                false
            }
        }
    }

    fn get_by_id(&self, id: &str) -> Option<ScanRecord> {
        self.get_all().into_iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tip;
    use crate::store::memory::fixtures::record;
    use crate::store::memory::InMemoryStore;
    use chrono::{Duration, TimeZone, Utc};

    fn ids(store: &InMemoryStore) -> Vec<String> {
        store.get_all().into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_store_has_no_history() {
        let store = InMemoryStore::new();
        assert!(store.get_all().is_empty());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn most_recent_first() {
        let store = InMemoryStore::new();
        for id in ["a", "b", "c"] {
            assert!(store.save(&record(id, "Organik")));
        }
        assert_eq!(ids(&store), vec!["c", "b", "a"]);
    }

    #[test]
    fn length_is_capped_after_every_save() {
        let store = InMemoryStore::new();
        for n in 1..=120 {
            assert!(store.save(&record(&format!("r{}", n), "Organik")));
            assert_eq!(store.get_all().len(), n.min(MAX_RETAINED));
        }
    }

    #[test]
    fn eviction_drops_oldest_inserted() {
        let store = InMemoryStore::new();
        for n in 1..=51 {
            store.save(&record(&format!("r{}", n), "Organik"));
        }
        let ids = ids(&store);
        assert_eq!(ids.len(), 50);
        assert_eq!(ids[0], "r51");
        assert!(!ids.contains(&"r1".to_string()));
        for n in 2..=51 {
            assert!(ids.contains(&format!("r{}", n)));
        }
    }

    #[test]
    fn eviction_ignores_scan_timestamps() {
        let store = InMemoryStore::new().with_max_retained(2);
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        // Inserted first but scanned last: still the first to go.
        store.save(&record("newest-scan", "Organik").with_scanned_at(base + Duration::days(10)));
        store.save(&record("old-scan", "Organik").with_scanned_at(base));
        store.save(&record("older-scan", "Organik").with_scanned_at(base - Duration::days(10)));

        assert_eq!(ids(&store), vec!["older-scan", "old-scan"]);
    }

    #[test]
    fn custom_cap_and_zero_cap() {
        let store = InMemoryStore::new().with_max_retained(3);
        for n in 0..5 {
            store.save(&record(&n.to_string(), "B3"));
        }
        assert_eq!(ids(&store), vec!["4", "3", "2"]);

        let store = InMemoryStore::new().with_max_retained(0);
        assert_eq!(store.max_retained(), 1);
        store.save(&record("a", "B3"));
        store.save(&record("b", "B3"));
        assert_eq!(ids(&store), vec!["b"]);
    }

    #[test]
    fn delete_is_idempotent() {
        let store = InMemoryStore::new();
        for id in ["a", "b", "c"] {
            store.save(&record(id, "Organik"));
        }
        assert!(store.delete("b"));
        assert!(store.delete("b"));
        assert_eq!(ids(&store), vec!["c", "a"]);

        assert!(store.delete("missing"));
        assert!(store.delete("missing"));
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn delete_removes_only_first_duplicate() {
        let store = InMemoryStore::new();
        store.save(&record("dup", "Organik"));
        store.save(&record("x", "Organik"));
        store.save(&record("dup", "Anorganik"));

        assert!(store.delete("dup"));
        let remaining = store.get_all();
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].id, "x");
        assert_eq!(remaining[1].id, "dup");
        assert_eq!(remaining[1].category, "Organik");
    }

    #[test]
    fn duplicate_ids_do_not_corrupt_history() {
        let store = InMemoryStore::new();
        for _ in 0..10 {
            assert!(store.save(&record("same", "Organik")));
        }
        let all = store.get_all();
        assert_eq!(all.len(), 10);
        assert!(all.iter().all(|r| r.id == "same"));
        let raw = store.backend().raw(HISTORY_KEY).unwrap();
        assert!(serde_json::from_str::<Vec<ScanRecord>>(&raw).is_ok());
    }

    #[test]
    fn clear_empties() {
        let store = InMemoryStore::new();
        store.save(&record("a", "Organik"));
        store.save(&record("b", "Organik"));
        assert!(store.clear());
        assert!(store.get_all().is_empty());
        assert_eq!(store.count(), 0);
        assert!(store.backend().raw(HISTORY_KEY).is_none());
        // clearing an empty store still succeeds
        assert!(store.clear());
    }

    #[test]
    fn get_by_id_found_and_absent() {
        let store = InMemoryStore::new();
        store.save(&record("a", "Organik"));
        store.save(&record("b", "Anorganik"));
        assert_eq!(store.get_by_id("a").unwrap().category, "Organik");
        assert!(store.get_by_id("zzz").is_none());
    }

    #[test]
    fn tips_round_trip_in_order() {
        let store = InMemoryStore::new();
        let tips = vec![
            Tip::new("Pisahkan plastik, kaca, dan logam", "#F59E0B"),
            Tip::new("Gunakan ulang wadah", "#8B5CF6"),
            Tip::new("Setorkan ke bank sampah", "#10B981"),
        ];
        let mut rec = record("tips", "Anorganik");
        rec.tips = tips.clone();
        store.save(&rec);

        let loaded = store.get_by_id("tips").unwrap();
        assert_eq!(loaded.tips, tips);
        assert_eq!(loaded, rec);
    }

    #[test]
    fn non_finite_confidence_keeps_history() {
        let store = InMemoryStore::new();
        for id in ["a", "b", "c"] {
            store.save(&record(id, "Organik"));
        }
        let mut odd = record("nan", "Anorganik");
        odd.confidence_percent = f64::NAN;
        assert!(store.save(&odd));
        assert!(store.save(&record("d", "Organik")));

        assert_eq!(ids(&store), vec!["d", "nan", "c", "b", "a"]);
        assert!(store.get_by_id("nan").unwrap().confidence_percent.is_nan());
    }

    #[test]
    fn corrupt_blob_reads_as_empty() {
        let store = InMemoryStore::new();
        store.backend().put_raw(HISTORY_KEY, "{not json");
        assert!(store.get_all().is_empty());
        assert_eq!(store.count(), 0);
        assert!(store.get_by_id("a").is_none());
    }

    #[test]
    fn save_replaces_corrupt_blob() {
        let store = InMemoryStore::new();
        store.backend().put_raw(HISTORY_KEY, "[{\"id\": 1}]");
        assert!(store.save(&record("fresh", "Organik")));
        assert_eq!(ids(&store), vec!["fresh"]);
    }

    #[test]
    fn write_failure_returns_false() {
        let store = InMemoryStore::new();
        store.save(&record("a", "Organik"));

        store.backend().set_simulate_write_error(true);
        assert!(!store.save(&record("b", "Organik")));
        assert!(!store.delete("a"));
        assert!(!store.clear());

        store.backend().set_simulate_write_error(false);
        assert_eq!(ids(&store), vec!["a"]);
    }

    #[test]
    fn read_failure_degrades_and_blocks_mutation() {
        let store = InMemoryStore::new();
        store.save(&record("a", "Organik"));

        store.backend().set_simulate_read_error(true);
        assert!(store.get_all().is_empty());
        assert!(!store.save(&record("b", "Organik")));
        assert!(!store.delete("a"));

        store.backend().set_simulate_read_error(false);
        assert_eq!(ids(&store), vec!["a"]);
    }

    #[test]
    fn delete_of_absent_id_does_not_write() {
        let store = InMemoryStore::new();
        store.save(&record("a", "Organik"));
        store.backend().set_simulate_write_error(true);
        // nothing to remove, so no write is attempted
        assert!(store.delete("missing"));
    }

    #[test]
    fn custom_key_is_used() {
        let store = InMemoryStore::new().with_key("other_history");
        store.save(&record("a", "Organik"));
        assert!(store.backend().raw("other_history").is_some());
        assert!(store.backend().raw(HISTORY_KEY).is_none());
    }
}
