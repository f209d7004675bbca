//! # Command Layer
//!
//! This module contains the **application logic** that sits between the store
//! and any UI. Each command lives in its own submodule and is a plain function
//! over a [`ScanHistory`](crate::store::ScanHistory) (and, for scanning, a
//! [`Classifier`](crate::classify::Classifier)).
//!
//! ## Role and Responsibilities
//!
//! - Compose store, aggregator and classifier into user-level operations
//! - Turn the store's sentinels (`false`, `None`) into errors or messages
//! - Return structured [`CmdResult`] values
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr, or formatting
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Command Modules
//!
//! - [`scan`]: Classify an image and record the result
//! - [`history`]: List stored scans
//! - [`view`]: Fetch one scan by id
//! - [`delete`]: Remove scans by id
//! - [`clear`]: Drop the whole history
//! - [`stats`]: Dashboard counters

use crate::classify::Classification;
use crate::model::ScanRecord;
use crate::stats::ScanStats;
use serde::Serialize;

pub mod clear;
pub mod delete;
pub mod history;
pub mod scan;
pub mod stats;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Records created or removed by the command.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_records: Vec<ScanRecord>,
    /// Records to display.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_records: Vec<ScanRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ScanStats>,
    /// Raw classifier answer, for scans.
    #[serde(skip)]
    pub classification: Option<Classification>,
    /// Whether a scan result made it into history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persisted: Option<bool>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<ScanRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<ScanRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_stats(mut self, stats: ScanStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
