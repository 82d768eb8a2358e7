// src/dag/critical_path.rs

//! Simplified critical-path computation.
//!
//! For every task, its *path length* is its own calendar-day duration plus
//! the maximum path length among its direct dependencies. The critical
//! path set is every task whose path length equals the global maximum
//! (ties included). This is the longest duration-weighted chain, not full
//! CPM: non-critical tasks carry no slack information.

use std::collections::{HashMap, HashSet};

use crate::dag::graph::TaskGraph;
use crate::types::TaskId;

/// Longest duration-weighted dependency chain ending at each task, in days.
///
/// Memoized over the whole graph, so the sweep is O(V+E). On corrupted
/// data containing a cycle, a task already on the active chain contributes
/// 0 to its caller instead of recursing further; the traversal terminates
/// and the values over the cyclic region are best-effort, not
/// authoritative.
pub fn path_lengths(graph: &TaskGraph) -> HashMap<TaskId, i64> {
    let mut memo: HashMap<TaskId, i64> = HashMap::with_capacity(graph.len());
    let mut on_stack: HashSet<TaskId> = HashSet::new();

    for id in graph.task_ids() {
        path_length(graph, id, &mut memo, &mut on_stack);
    }

    memo
}

/// Ids of every task lying on a longest duration-weighted chain.
///
/// Empty iff the graph is empty.
pub fn critical_path_task_ids(graph: &TaskGraph) -> HashSet<TaskId> {
    let lengths = path_lengths(graph);

    let Some(&longest) = lengths.values().max() else {
        return HashSet::new();
    };

    lengths
        .into_iter()
        .filter(|(_, len)| *len == longest)
        .map(|(id, _)| id)
        .collect()
}

// Recursion depth is bounded by the task count: the on-stack guard stops
// revisits, so each frame adds one distinct task before a leaf or a cycle
// is hit.
fn path_length(
    graph: &TaskGraph,
    id: &str,
    memo: &mut HashMap<TaskId, i64>,
    on_stack: &mut HashSet<TaskId>,
) -> i64 {
    if let Some(&len) = memo.get(id) {
        return len;
    }
    if on_stack.contains(id) {
        // Cycle guard: degenerate zero contribution, not an error.
        return 0;
    }
    let Some(task) = graph.lookup(id) else {
        // Unresolved ids are dropped from chain walks.
        return 0;
    };

    on_stack.insert(id.to_string());

    let mut longest_dep = 0;
    for dep in graph.dependencies_of(id) {
        if graph.lookup(dep).is_none() {
            continue;
        }
        longest_dep = longest_dep.max(path_length(graph, dep, memo, on_stack));
    }

    on_stack.remove(id);

    let len = task.duration_days() + longest_dep;
    memo.insert(id.to_string(), len);
    len
}
