use crate::commands::CmdResult;
use crate::stats::StatisticsAggregator;
use crate::store::ScanHistory;

pub fn run<S: ScanHistory>(store: &S) -> CmdResult {
    CmdResult::default().with_stats(StatisticsAggregator::new(store).compute())
}
