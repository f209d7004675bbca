use crate::commands::{CmdMessage, CmdResult};
use crate::model::CategoryBucket;
use crate::store::ScanHistory;

#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Only records in this bucket.
    pub bucket: Option<CategoryBucket>,
    /// At most this many records, newest first.
    pub limit: Option<usize>,
}

pub fn run<S: ScanHistory>(store: &S, filter: &HistoryFilter) -> CmdResult {
    let records: Vec<_> = store
        .get_all()
        .into_iter()
        .filter(|r| filter.bucket.map_or(true, |b| r.bucket() == b))
        .take(filter.limit.unwrap_or(usize::MAX))
        .collect();

    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No scans yet"));
    }
    result.with_listed_records(records)
}
