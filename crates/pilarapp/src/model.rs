//! # Domain Model: Scan Records
//!
//! A [`ScanRecord`] is one completed classification event: the image that was
//! scanned, what the classification service called it, and the disposal tips
//! shown to the user. Records are created once, after a successful
//! classification, and never modified afterwards.
//!
//! ## Wire Format
//!
//! Records are persisted as JSON objects with the field names the mobile app
//! has always used, so histories written by earlier clients stay readable:
//!
//! ```text
//! {
//!   "id": "1718000000000",
//!   "imageUri": "file:///.../scan.jpg",
//!   "wasteType": "Sisa Makanan",
//!   "category": "Organik",
//!   "confidence": 92.5,
//!   "description": "...",
//!   "tips": [{ "title": "...", "color": "#10B981" }],
//!   "scanDate": "2024-06-10T06:13:20Z"
//! }
//! ```
//!
//! ## Categories
//!
//! `category` is free text. The labels seen in practice are `Organik`,
//! `Anorganik` and `B3` (hazardous), sometimes prefixed with `Sampah `.
//! [`CategoryBucket::of`] maps any label onto a coarse bucket. Note that
//! "anorganik" contains "organik", so the inorganic check must come first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single disposal tip. Order within a record is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    #[serde(rename = "color")]
    pub color_hex: String,
}

impl Tip {
    pub fn new(title: impl Into<String>, color_hex: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color_hex: color_hex.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: String,
    #[serde(rename = "imageUri")]
    pub image_reference: String,
    #[serde(rename = "wasteType")]
    pub waste_label: String,
    pub category: String,
    #[serde(rename = "confidence", deserialize_with = "confidence_or_nan")]
    pub confidence_percent: f64,
    pub description: String,
    #[serde(default)]
    pub tips: Vec<Tip>,
    #[serde(rename = "scanDate")]
    pub scanned_at: DateTime<Utc>,
}

/// JSON has no NaN or infinity; serde_json writes them as `null`.
fn confidence_or_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl ScanRecord {
    /// Creates a record stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        image_reference: impl Into<String>,
        waste_label: impl Into<String>,
        category: impl Into<String>,
        confidence_percent: f64,
        description: impl Into<String>,
        tips: Vec<Tip>,
    ) -> Self {
        Self {
            id: id.into(),
            image_reference: image_reference.into(),
            waste_label: waste_label.into(),
            category: category.into(),
            confidence_percent,
            description: description.into(),
            tips,
            scanned_at: Utc::now(),
        }
    }

    pub fn with_scanned_at(mut self, scanned_at: DateTime<Utc>) -> Self {
        self.scanned_at = scanned_at;
        self
    }

    /// Timestamp-derived id (milliseconds since the Unix epoch).
    ///
    /// Two ids generated within the same millisecond collide; callers that
    /// create records in a tight loop must supply their own ids.
    pub fn new_id() -> String {
        Utc::now().timestamp_millis().to_string()
    }

    pub fn bucket(&self) -> CategoryBucket {
        CategoryBucket::of(&self.category)
    }
}

/// Coarse grouping of free-text category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryBucket {
    Organic,
    Inorganic,
    Hazardous,
    Other,
}

impl CategoryBucket {
    pub fn of(category: &str) -> Self {
        let lower = category.to_lowercase();
        if lower.contains("anorganik") {
            CategoryBucket::Inorganic
        } else if lower.contains("organik") {
            CategoryBucket::Organic
        } else if lower.contains("b3") {
            CategoryBucket::Hazardous
        } else {
            CategoryBucket::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryBucket::Organic => "organic",
            CategoryBucket::Inorganic => "inorganic",
            CategoryBucket::Hazardous => "hazardous",
            CategoryBucket::Other => "other",
        }
    }

    /// The tips the classification service attaches to each category.
    /// Unknown categories get the inorganic list, matching the service's fallback.
    pub fn default_tips(&self) -> Vec<Tip> {
        let entries: &[(&str, &str)] = match self {
            CategoryBucket::Organic => &[
                ("Pisahkan sampah organik dari anorganik", "#10B981"),
                ("Buat kompos dari sisa makanan", "#4DB8AC"),
                ("Gunakan untuk pakan ternak jika memungkinkan", "#F59E0B"),
                ("Hindari mencampur dengan plastik", "#8B5CF6"),
                ("Proses dalam waktu 24 jam untuk menghindari bau", "#EF4444"),
            ],
            CategoryBucket::Hazardous => &[
                ("Jangan buang sembarangan, berbahaya!", "#EF4444"),
                ("Simpan dalam wadah tertutup khusus", "#F59E0B"),
                ("Serahkan ke tempat pengolahan B3", "#8B5CF6"),
                ("Jauhkan dari jangkauan anak-anak", "#EF4444"),
                ("Gunakan label peringatan pada wadah", "#10B981"),
            ],
            CategoryBucket::Inorganic | CategoryBucket::Other => &[
                ("Bersihkan sampah anorganik sebelum dibuang", "#4DB8AC"),
                ("Pisahkan plastik, kaca, dan logam", "#F59E0B"),
                ("Gunakan ulang wadah yang masih layak", "#8B5CF6"),
                ("Tekan plastik/kardus agar hemat ruang", "#EF4444"),
                ("Setorkan ke bank sampah terdekat", "#10B981"),
            ],
        };
        entries
            .iter()
            .map(|(title, color)| Tip::new(*title, *color))
            .collect()
    }
}

impl std::fmt::Display for CategoryBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
