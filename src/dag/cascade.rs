// src/dag/cascade.rs

//! Cascading date-shift propagation.
//!
//! When a task's end date moves, every task that directly depends on it is
//! shifted by the same number of calendar days, durations preserved. The
//! caller persists the returned triples; this module performs no writes.

use chrono::{Duration, NaiveDate};

use tracing::debug;

use crate::dag::graph::TaskGraph;
use crate::types::TaskId;

/// New dates for one task, to be persisted by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateShift {
    pub task_id: TaskId,
    pub new_start: NaiveDate,
    pub new_end: NaiveDate,
}

/// Knock-on date shifts caused by `changed_task_id`'s end date moving from
/// `old_end` to `new_end`.
///
/// Precondition: the changed task's own new dates are already persisted;
/// only the effect on others is computed here. Returns one entry per
/// *direct* dependent, each shifted by the signed day delta. A zero delta
/// returns nothing, so no redundant downstream writes happen.
///
/// Known limitation: propagation is single-hop. Dependents-of-dependents
/// are not shifted in the same pass; they are picked up when the host
/// persists these shifts and re-invokes on the next snapshot.
///
/// No check is made that a shifted task stays consistent with its *other*
/// prerequisites; that surfaces through the readiness classifier and the
/// edit-time advisory warning instead.
pub fn cascade_shift(
    graph: &TaskGraph,
    changed_task_id: &str,
    old_end: NaiveDate,
    new_end: NaiveDate,
) -> Vec<DateShift> {
    let day_shift = (new_end - old_end).num_days();
    if day_shift == 0 {
        return Vec::new();
    }

    let delta = Duration::days(day_shift);

    let shifts: Vec<DateShift> = graph
        .dependent_tasks(changed_task_id)
        .into_iter()
        .map(|dep| DateShift {
            task_id: dep.id.clone(),
            new_start: dep.start_date + delta,
            new_end: dep.end_date + delta,
        })
        .collect();

    debug!(
        task = %changed_task_id,
        day_shift,
        dependents = shifts.len(),
        "computed cascade shifts for direct dependents"
    );

    shifts
}
