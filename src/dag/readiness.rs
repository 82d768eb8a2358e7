// src/dag/readiness.rs

//! Ready/blocked classification.
//!
//! A task is *ready* when every resolvable dependency is completed, and
//! *blocked* when at least one resolvable dependency is not. The two are
//! complements over the "has an incomplete resolvable dependency"
//! predicate; a task with no dependencies is ready and not blocked.

use tracing::debug;

use crate::dag::graph::TaskGraph;
use crate::snapshot::model::Task;
use crate::types::TaskStatus;

/// Whether `task` can be started: no dependencies, or every resolvable
/// dependency has completed.
///
/// A dependency id that does not resolve (the prerequisite was deleted) is
/// treated as satisfied and never blocks.
pub fn is_ready(graph: &TaskGraph, task: &Task) -> bool {
    !has_incomplete_dependency(graph, task)
}

/// Whether at least one resolvable dependency of `task` is not completed.
pub fn is_blocked(graph: &TaskGraph, task: &Task) -> bool {
    has_incomplete_dependency(graph, task)
}

/// The resolved dependencies of `task` that are not yet completed, in
/// dependency-list order. This is the "why is it blocked" explanation.
pub fn blocking_tasks<'a>(graph: &'a TaskGraph, task: &Task) -> Vec<&'a Task> {
    task.dependencies
        .iter()
        .filter_map(|dep| graph.lookup(dep))
        .filter(|dep| dep.status != TaskStatus::Completed)
        .collect()
}

fn has_incomplete_dependency(graph: &TaskGraph, task: &Task) -> bool {
    task.dependencies.iter().any(|dep_id| {
        match graph.lookup(dep_id) {
            Some(dep) => dep.status != TaskStatus::Completed,
            None => {
                // Deleted prerequisites are routine; they never block.
                debug!(
                    task = %task.id,
                    dep = %dep_id,
                    "dependency not present in snapshot; treating as satisfied"
                );
                false
            }
        }
    })
}
