// src/dag/next_task.rs

//! Next-up task selection.
//!
//! "What should be worked on next" = not finished or parked, all
//! prerequisites completed, and not scheduled to start in the future,
//! ordered by start date. The selector also lets the caller tell an empty
//! backlog apart from a backlog where everything left is blocked.

use chrono::NaiveDate;

use crate::dag::graph::TaskGraph;
use crate::dag::readiness;
use crate::snapshot::model::Task;
use crate::types::TaskStatus;

/// Outcome of a next-up selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextUp<'a> {
    /// Workable tasks, ascending by start date.
    Ready(Vec<&'a Task>),
    /// Incomplete tasks exist, but none passed the filter: all remaining
    /// work is blocked (or parked, or future-dated).
    AllBlocked,
    /// No incomplete task at all.
    BacklogEmpty,
}

/// Every task that could be worked on as of `today`, ascending by start
/// date (chronological; ties keep snapshot order).
///
/// Excluded: completed and on-hold tasks, tasks with an incomplete
/// prerequisite, and tasks whose start date is strictly after `today`.
pub fn next_tasks<'a>(graph: &'a TaskGraph, today: NaiveDate) -> Vec<&'a Task> {
    let mut candidates: Vec<&Task> = graph
        .tasks()
        .filter(|task| {
            task.status != TaskStatus::Completed && task.status != TaskStatus::OnHold
        })
        .filter(|task| task.start_date <= today)
        .filter(|task| readiness::is_ready(graph, task))
        .collect();

    // Stable sort, so equal start dates keep snapshot order.
    candidates.sort_by_key(|task| task.start_date);
    candidates
}

/// The single earliest workable task, if any.
pub fn next_task<'a>(graph: &'a TaskGraph, today: NaiveDate) -> Option<&'a Task> {
    next_tasks(graph, today).into_iter().next()
}

/// How many direct dependents of `task_id` are not yet completed.
///
/// Used for "this unblocks N downstream tasks" messaging; it does not
/// influence ordering.
pub fn blocked_task_count(graph: &TaskGraph, task_id: &str) -> usize {
    graph
        .dependent_tasks(task_id)
        .into_iter()
        .filter(|task| task.status != TaskStatus::Completed)
        .count()
}

/// Next-up selection with the degenerate cases made explicit.
///
/// An empty filter result is only "nothing left to do" when no incomplete
/// task exists; otherwise the remaining work is blocked and the caller
/// should say so instead of celebrating.
pub fn plan_next<'a>(graph: &'a TaskGraph, today: NaiveDate) -> NextUp<'a> {
    let ready = next_tasks(graph, today);
    if !ready.is_empty() {
        return NextUp::Ready(ready);
    }

    let has_incomplete = graph
        .tasks()
        .any(|task| task.status != TaskStatus::Completed);

    if has_incomplete {
        NextUp::AllBlocked
    } else {
        NextUp::BacklogEmpty
    }
}
