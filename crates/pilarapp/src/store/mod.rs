//! # Storage Layer
//!
//! Scan history is a **best-effort local cache**: losing it is an annoyance,
//! not a failure, since any result can be recovered by scanning again. The
//! storage layer is built around that.
//!
//! ## Layout
//!
//! The whole history lives in a single string value under one key
//! (`scan_history` by default): a JSON array of [`ScanRecord`]s, newest first.
//!
//! ```text
//! <data dir>/
//! ├── pilar.toml          # Configuration
//! └── scan_history.json   # History blob (FsBackend)
//! ```
//!
//! ## Operations
//!
//! Every mutation is a whole-blob read-modify-write:
//!
//! - **save**: insert at the front, truncate the tail beyond the retention cap.
//!   Eviction follows insertion order, not `scanDate`.
//! - **delete**: drop the first record with the id. Absent ids are a no-op success.
//! - **clear**: remove the key.
//!
//! ## Failure Policy
//!
//! [`ScanHistory`] never returns errors. Reads degrade to "no history"
//! (missing key, I/O failure, unparsable blob); mutations report `false`.
//! Every swallowed error is logged at `warn`.
//!
//! ## Concurrency
//!
//! There is no locking. Two writers interleaving their read-modify-write
//! cycles lose one of the updates: last writer wins on the whole collection.
//! Acceptable for a single-user local cache.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: [`scan_store::ScanRecordStore`] over [`fs_backend::FsBackend`].
//! - [`memory::InMemoryStore`]: the same store over [`mem_backend::MemBackend`], for tests.

use crate::model::ScanRecord;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod scan_store;

/// Ordered, capped persistence of scan records.
///
/// Implementations swallow storage failures; see the module docs.
pub trait ScanHistory {
    /// All records, most recently inserted first. Empty when unreadable.
    fn get_all(&self) -> Vec<ScanRecord>;

    /// Insert at the front, evicting beyond the cap. `false` on failure.
    fn save(&self, record: &ScanRecord) -> bool;

    /// Remove the first record with `id`. `true` even if none matched.
    fn delete(&self, id: &str) -> bool;

    /// Drop the whole history.
    fn clear(&self) -> bool;

    fn get_by_id(&self, id: &str) -> Option<ScanRecord>;

    fn count(&self) -> usize {
        self.get_all().len()
    }
}
