//! Recovery pass run before every CLI command.
//!
//! A crash during a renumbering pass can leave mixed widths or gaps. Running
//! [`resequence_all`] on every start puts the collection back in canonical shape before
//! anyone reads an id. Cached results that predate the repair are dropped.

use crate::cache::Cache;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::sequence::resequence_all;
use crate::store::RecordStore;
use tracing::info;

pub fn recover<S: RecordStore, C: Cache>(
    store: &mut S,
    cache: &C,
    resequence: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !resequence || store.count()? == 0 {
        return Ok(result);
    }

    let report = resequence_all(store)?;
    if report.rewritten > 0 {
        info!(
            rewritten = report.rewritten,
            "customer ids were out of sequence and have been repaired"
        );
        cache.invalidate_all()?;
        result.add_message(CmdMessage::warning(format!(
            "Repaired {} customer ids left out of sequence",
            report.rewritten
        )));
    }
    Ok(result)
}
