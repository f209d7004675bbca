use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PilarError, Result};
use crate::store::ScanHistory;

pub fn run<S: ScanHistory>(store: &S) -> Result<CmdResult> {
    let removed = store.count();
    if !store.clear() {
        return Err(PilarError::Store("Could not clear scan history".to_string()));
    }
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cleared {} scan{}",
        removed,
        if removed == 1 { "" } else { "s" }
    )));
    Ok(result)
}
