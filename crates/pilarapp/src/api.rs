//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for UI clients (the CLI today, an app shell tomorrow).
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (image paths become uploads and image references)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no terminal I/O and no formatting.
//!
//! ## Generic Over ScanHistory
//!
//! `PilarApi<S: ScanHistory>` is generic over the store:
//! - Production: `PilarApi<FileStore>`
//! - Testing: `PilarApi<InMemoryStore>`
//!
//! The classifier is passed per call, so read-only clients never need one.

use crate::classify::{Classifier, ImageUpload};
use crate::commands::{self, history::HistoryFilter, CmdResult};
use crate::error::Result;
use crate::store::ScanHistory;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PilarPaths {
    pub data_dir: PathBuf,
}

pub struct PilarApi<S: ScanHistory> {
    store: S,
    paths: PilarPaths,
}

impl<S: ScanHistory> PilarApi<S> {
    pub fn new(store: S, paths: PilarPaths) -> Self {
        Self { store, paths }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn paths(&self) -> &PilarPaths {
        &self.paths
    }

    /// Classifies the image at `path` and records the result.
    pub fn scan_image<C: Classifier>(&self, classifier: &C, path: &Path) -> Result<CmdResult> {
        let upload = ImageUpload::from_path(path)?;
        let reference = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf())
            .display()
            .to_string();
        commands::scan::run(&self.store, classifier, &upload, &reference)
    }

    /// Classifies an in-memory image; `image_reference` is stored as-is.
    pub fn scan_upload<C: Classifier>(
        &self,
        classifier: &C,
        upload: &ImageUpload,
        image_reference: &str,
    ) -> Result<CmdResult> {
        commands::scan::run(&self.store, classifier, upload, image_reference)
    }

    pub fn list_scans(&self, filter: &HistoryFilter) -> Result<CmdResult> {
        Ok(commands::history::run(&self.store, filter))
    }

    pub fn view_scan(&self, id: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn delete_scans<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        commands::delete::run(&self.store, ids)
    }

    pub fn clear_history(&self) -> Result<CmdResult> {
        commands::clear::run(&self.store)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        Ok(commands::stats::run(&self.store))
    }
}
