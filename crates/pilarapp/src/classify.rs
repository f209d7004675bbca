//! # Classification Service Contract
//!
//! The classifier is a remote collaborator: it receives an image and answers
//! with a waste type, category, confidence and tips. This module owns the
//! response envelope and the conversion into a [`ScanRecord`]; the transport
//! lives behind the [`Classifier`] trait (see [`crate::http_client`]).
//!
//! ## Envelope
//!
//! ```text
//! success: {"success": true,  "data": {"wasteType", "category", "confidence", "tips", "description"}}
//! failure: {"success": false, "message": "..."}
//! errors:  {"detail": "..."}            (framework-level rejections, non-2xx)
//! ```
//!
//! Unknown fields (e.g. `modelInfo`) are ignored.

use crate::error::{PilarError, Result};
use crate::model::{ScanRecord, Tip};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parsed payload of a successful classification.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Classification {
    #[serde(rename = "wasteType")]
    pub waste_type: String,
    pub category: String,
    pub confidence: f64,
    #[serde(default)]
    pub tips: Vec<Tip>,
    #[serde(default)]
    pub description: String,
}

impl Classification {
    /// Builds the record to persist for this result.
    ///
    /// A response without tips gets the default tips for its category, and an
    /// empty description is filled in from the waste type and category.
    pub fn into_record(self, image_reference: impl Into<String>) -> ScanRecord {
        let tips = if self.tips.is_empty() {
            crate::model::CategoryBucket::of(&self.category).default_tips()
        } else {
            self.tips
        };
        let description = if self.description.trim().is_empty() {
            format!(
                "{} termasuk dalam kategori {}",
                self.waste_type, self.category
            )
        } else {
            self.description
        };
        ScanRecord::new(
            ScanRecord::new_id(),
            image_reference,
            self.waste_type,
            self.category,
            self.confidence,
            description,
            tips,
        )
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    data: Option<Classification>,
    message: Option<String>,
    detail: Option<serde_json::Value>,
}

/// Parses a classification service response body.
pub fn parse_response(body: &str) -> Result<Classification> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| PilarError::Classification(format!("unreadable response: {}", e)))?;

    if envelope.success {
        return envelope
            .data
            .ok_or_else(|| PilarError::Classification("response has no data".to_string()));
    }

    let reason = envelope
        .message
        .or_else(|| envelope.detail.map(|d| detail_text(&d)))
        .unwrap_or_else(|| "unknown error".to_string());
    Err(PilarError::Classification(reason))
}

fn detail_text(detail: &serde_json::Value) -> String {
    match detail {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// An image ready to be uploaded.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image.jpg")
            .to_string();
        let content_type = content_type_for(path).to_string();
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// The classification collaborator.
pub trait Classifier {
    fn classify(&self, image: &ImageUpload) -> Result<Classification>;
}
