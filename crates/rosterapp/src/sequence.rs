//! # Customer Id Sequence
//!
//! Customer ids are always exactly the zero-padded integers `1..=N`, where `N` is the
//! number of records and the width is the digit count of `N` (see [`crate::ident`]).
//! Two operations keep it that way:
//!
//! - [`assign_on_create`]: numbers a record the store just created. Usually this touches
//!   only the new record. When the population crosses a power of ten (9 → 10, 99 → 100)
//!   every existing id grows by a digit, so all of them are rewritten.
//! - [`resequence_all`]: renumbers the whole collection from scratch. Run after every
//!   delete to close the gap (and shrink the width when crossing back under a power of
//!   ten), and at startup to repair an interrupted pass.
//!
//! Both derive the population from the store on every call; there is no counter to
//! drift out of sync.
//!
//! ## Ordering
//!
//! Both paths rank records with [`sort_by_customer_id`], so a milestone rewrite and a
//! full resequence always agree on who is number 1.
//!
//! ## Writers
//!
//! The functions take `&mut S`: within a process one caller at a time can renumber.
//! Count-then-assign is not protected against other processes writing the same store;
//! two concurrent creators can end up with the same id. A failed call leaves ids in an
//! unknown state and callers should run [`resequence_all`] before trusting them again.

use crate::error::{Result, RosterError};
use crate::ident::{format_id, padding_width, width_changed};
use crate::model::Customer;
use crate::store::{sort_by_customer_id, RecordStore};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Outcome of a full renumbering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResequenceReport {
    /// Records in the collection after the pass.
    pub total: usize,
    /// Records whose id actually changed.
    pub rewritten: usize,
    /// Id width in effect after the pass.
    pub width: usize,
}

/// Numbers the freshly created record `new_id` and returns its customer id.
///
/// The record must already be in the store, without an id. If adding it changes the id
/// width, or other records were found without an id, every other record is renumbered
/// at the new width in the same write.
pub fn assign_on_create<S: RecordStore>(store: &mut S, new_id: &Uuid) -> Result<String> {
    let (newcomer, existing): (Vec<Customer>, Vec<Customer>) = ordered_records(store)?
        .into_iter()
        .partition(|c| c.id == *new_id);
    if newcomer.is_empty() {
        return Err(RosterError::NotFound(*new_id));
    }

    let numbered = existing.iter().filter(|c| c.customer_id.is_some()).count();
    let unnumbered = existing.len() - numbered;
    let new_count = existing.len() + 1;
    let width = padding_width(new_count);

    let mut changes = Vec::new();
    if unnumbered > 0 {
        // Left behind by an interrupted add; they sort last and take the next ranks
        warn!(
            unnumbered,
            "found customers without an id, renumbering before assigning"
        );
        changes = renumber(&existing, width)?;
    } else if width_changed(new_count, numbered) {
        info!(
            records = existing.len(),
            from = padding_width(numbered),
            to = width,
            "id width changed, rewriting existing ids"
        );
        changes = renumber(&existing, width)?;
    }

    let assigned = format_id(new_count, width)?;
    changes.push((*new_id, assigned.clone()));
    store.update_customer_ids(&changes)?;

    debug!(id = %new_id, customer_id = %assigned, "assigned customer id");
    Ok(assigned)
}

/// Renumbers every record `1..=N` at the width for `N`, writing only the ids that change.
///
/// Running it twice in a row is a no-op the second time.
pub fn resequence_all<S: RecordStore>(store: &mut S) -> Result<ResequenceReport> {
    let records = ordered_records(store)?;
    let width = padding_width(records.len());

    let changes = renumber(&records, width)?;
    store.update_customer_ids(&changes)?;

    let report = ResequenceReport {
        total: records.len(),
        rewritten: changes.len(),
        width,
    };
    if report.rewritten > 0 {
        info!(
            total = report.total,
            rewritten = report.rewritten,
            width = report.width,
            "resequenced customer ids"
        );
    }
    Ok(report)
}

fn ordered_records<S: RecordStore>(store: &S) -> Result<Vec<Customer>> {
    let mut records = store.scan_ordered_by_customer_id()?;
    // Rank on our own order, whatever order the store scanned in
    sort_by_customer_id(&mut records);
    Ok(records)
}

/// Target ids for `records` taken as ranks `1..`, keeping only the ones that differ.
fn renumber(records: &[Customer], width: usize) -> Result<Vec<(Uuid, String)>> {
    let mut changes = Vec::new();
    for (i, record) in records.iter().enumerate() {
        let target = format_id(i + 1, width)?;
        if record.customer_id.as_deref() != Some(target.as_str()) {
            debug!(
                id = %record.id,
                from = record.display_id(),
                to = %target,
                "renumbering customer"
            );
            changes.push((record.id, target));
        }
    }
    Ok(changes)
}
