//! Scan → classify → persist.
//!
//! The classification result is the product; history is a side effect. A
//! failed save is reported as a warning and the record is still returned so
//! the caller can show it.

use crate::classify::{Classifier, ImageUpload};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ScanHistory;

pub fn run<S: ScanHistory, C: Classifier>(
    store: &S,
    classifier: &C,
    image: &ImageUpload,
    image_reference: &str,
) -> Result<CmdResult> {
    let classification = classifier.classify(image)?;
    let record = classification.clone().into_record(image_reference);

    let mut result = CmdResult::default();
    let persisted = store.save(&record);
    if persisted {
        result.add_message(CmdMessage::success(format!(
            "Scan saved: {} ({}, {:.1}%)",
            record.waste_label, record.category, record.confidence_percent
        )));
    } else {
        result.add_message(CmdMessage::warning(
            "Scan result could not be saved to history",
        ));
    }

    result.persisted = Some(persisted);
    result.classification = Some(classification);
    Ok(result.with_affected_records(vec![record]))
}
