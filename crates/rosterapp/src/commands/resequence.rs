use crate::cache::Cache;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::sequence::resequence_all;
use crate::store::RecordStore;

pub fn run<S: RecordStore, C: Cache>(store: &mut S, cache: &C) -> Result<CmdResult> {
    let report = resequence_all(store)?;
    cache.invalidate_all()?;

    let mut result = CmdResult::default();
    if report.rewritten == 0 {
        result.add_message(CmdMessage::info(format!(
            "All {} customer ids already in sequence",
            report.total
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Resequenced {} customers ({} ids changed, width {})",
            report.total, report.rewritten, report.width
        )));
    }
    Ok(result)
}
