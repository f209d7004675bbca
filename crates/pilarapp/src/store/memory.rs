use super::mem_backend::MemBackend;
use super::scan_store::ScanRecordStore;

pub type InMemoryStore = ScanRecordStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ScanRecordStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ScanRecord, Tip};
    use crate::store::ScanHistory;

    /// A record with the given id and category and one tip.
    pub fn record(id: &str, category: &str) -> ScanRecord {
        ScanRecord::new(
            id,
            format!("file:///scans/{}.jpg", id),
            "Sisa Makanan",
            category,
            87.5,
            format!("Scan {}", id),
            vec![Tip::new("Buat kompos dari sisa makanan", "#4DB8AC")],
        )
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Saves one record per category, in order, with ids `s1`, `s2`, ...
        pub fn with_categories(self, categories: &[&str]) -> Self {
            for (i, category) in categories.iter().enumerate() {
                let saved = self.store.save(&record(&format!("s{}", i + 1), category));
                assert!(saved, "fixture save failed");
            }
            self
        }

        pub fn with_records(self, count: usize) -> Self {
            for i in 0..count {
                self.store.save(&record(&format!("r{}", i + 1), "Organik"));
            }
            self
        }
    }
}
