// src/dag/edit.rs

//! Edit-time validation boundary.
//!
//! Before submitting a create/update, the host runs the candidate
//! dependency set through [`check_edit`]: the cycle verdict is a hard
//! signal (the host must refuse to submit), the schedule overlap is
//! advisory only (warn, let the user proceed). Both come back as plain
//! values; a rejected edit is routine, not an error.

use chrono::NaiveDate;

use crate::dag::cycle::would_create_cycle;
use crate::dag::graph::TaskGraph;
use crate::snapshot::model::Task;
use crate::types::TaskId;

/// Advisory finding: the edited task would start before a prerequisite ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyOverlap {
    pub dependency_id: TaskId,
    pub dependency_end: NaiveDate,
}

/// Result of validating one candidate edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCheck {
    /// The edit would make the graph cyclic; submission must be blocked.
    pub creates_cycle: bool,
    /// The proposed start precedes the latest resolved dependency's end;
    /// surface as a warning, do not block.
    pub starts_before_dependency: Option<DependencyOverlap>,
}

/// The resolved dependency with the latest end date, if any resolve.
pub fn latest_dependency_end<'a>(graph: &'a TaskGraph, deps: &[TaskId]) -> Option<&'a Task> {
    deps.iter()
        .filter_map(|id| graph.lookup(id))
        .max_by_key(|task| task.end_date)
}

/// Validate a candidate edit of `task_id` (or of a task being created,
/// when `None`) against the current snapshot.
pub fn check_edit(
    graph: &TaskGraph,
    task_id: Option<&str>,
    candidate_deps: &[TaskId],
    start_date: Option<NaiveDate>,
) -> EditCheck {
    let creates_cycle = would_create_cycle(graph, task_id, candidate_deps);

    let starts_before_dependency = match start_date {
        Some(start) => latest_dependency_end(graph, candidate_deps)
            .filter(|dep| start < dep.end_date)
            .map(|dep| DependencyOverlap {
                dependency_id: dep.id.clone(),
                dependency_end: dep.end_date,
            }),
        None => None,
    };

    EditCheck {
        creates_cycle,
        starts_before_dependency,
    }
}
