use crate::commands::CmdResult;
use crate::error::{PilarError, Result};
use crate::store::ScanHistory;

pub fn run<S: ScanHistory>(store: &S, id: &str) -> Result<CmdResult> {
    let record = store
        .get_by_id(id)
        .ok_or_else(|| PilarError::RecordNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}
