use crate::error::Result;

/// Abstract interface for the local key-value store.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ScanRecordStore handles the "what" (ordering, retention, degradation).
///
/// Values are opaque strings; every write replaces the whole value under its key.
pub trait KeyValueBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
