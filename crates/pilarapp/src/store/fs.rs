use super::fs_backend::FsBackend;
use super::scan_store::ScanRecordStore;
use std::path::PathBuf;

/// Production store: the history blob lives in `<data_dir>/<key>.json`.
pub type FileStore = ScanRecordStore<FsBackend>;

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        ScanRecordStore::with_backend(FsBackend::new(data_dir))
    }

    /// Path of the history file, if the key is a valid file name.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.backend.item_path(self.key()).ok()
    }
}
