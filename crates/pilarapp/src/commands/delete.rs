use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PilarError, Result};
use crate::store::ScanHistory;

/// Deletes each id in turn. Unknown ids are reported, not rejected.
pub fn run<S: ScanHistory, I: AsRef<str>>(store: &S, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        let existing = store.get_by_id(id);
        if !store.delete(id) {
            return Err(PilarError::Store(format!("Could not delete scan {}", id)));
        }
        match existing {
            Some(record) => {
                result.add_message(CmdMessage::success(format!(
                    "Scan deleted ({}): {}",
                    id, record.waste_label
                )));
                result.affected_records.push(record);
            }
            None => result.add_message(CmdMessage::info(format!("No scan with id {}", id))),
        }
    }

    Ok(result)
}
