// src/dag/cycle.rs

//! Edit-time cycle detection.
//!
//! Before a dependency edit is submitted to the store, the host asks
//! whether the graph *after* the edit would contain a cycle reachable from
//! the edited task. The check is advisory: it returns a boolean and
//! mutates nothing; refusing the submission is the host's job.

use std::collections::HashSet;

use crate::dag::graph::TaskGraph;
use crate::types::TaskId;

/// Would giving `task_id` the dependency list `candidate_deps` create a
/// cycle?
///
/// `task_id` is `None` for a task that is being created and has no store id
/// yet: no existing edge can point at it, so a cycle can only arise inside
/// the candidate set's own transitive closure.
///
/// The traversal walks the hypothetical graph in which the edited task's
/// outgoing edges are replaced by `candidate_deps` while every other task
/// keeps its stored edges. It uses an explicit stack (no host-stack
/// recursion) and flags a back-edge into the current path; nodes that were
/// fully explored and popped are never re-flagged. That makes it terminate
/// even when the stored graph already contains an unrelated cycle. A stored
/// cycle that is reachable from the edit is reported too, since committing
/// the edit would still leave the data cyclic.
pub fn would_create_cycle<'a>(
    graph: &'a TaskGraph,
    task_id: Option<&'a str>,
    candidate_deps: &'a [TaskId],
) -> bool {
    // A task listing itself is a cycle of length one; no traversal needed.
    if let Some(id) = task_id {
        if candidate_deps.iter().any(|dep| dep.as_str() == id) {
            return true;
        }
    }

    let mut visited: HashSet<&'a str> = HashSet::new();
    let mut on_path: HashSet<&'a str> = HashSet::new();

    let roots: Vec<&'a str> = match task_id {
        Some(id) => vec![id],
        // Nothing points at a not-yet-created task, so walking each
        // candidate directly is equivalent to walking through it.
        None => candidate_deps.iter().map(|dep| dep.as_str()).collect(),
    };

    for root in roots {
        if visited.contains(root) {
            continue;
        }
        if walk_finds_back_edge(graph, task_id, candidate_deps, root, &mut visited, &mut on_path) {
            return true;
        }
    }

    false
}

/// Outgoing edges of `node` in the hypothetical post-edit graph.
///
/// Unknown ids (deleted tasks) have no node and therefore no edges.
fn hypothetical_edges<'a>(
    graph: &'a TaskGraph,
    edited: Option<&str>,
    candidate_deps: &'a [TaskId],
    node: &str,
) -> &'a [TaskId] {
    match edited {
        Some(id) if id == node => candidate_deps,
        _ => graph.dependencies_of(node),
    }
}

/// Iterative DFS from `root`; `true` iff an edge into the current path is
/// found. `visited` and `on_path` are shared across roots.
fn walk_finds_back_edge<'a>(
    graph: &'a TaskGraph,
    edited: Option<&'a str>,
    candidate_deps: &'a [TaskId],
    root: &'a str,
    visited: &mut HashSet<&'a str>,
    on_path: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(root);
    on_path.insert(root);

    // (node, index of the next outgoing edge to look at)
    let mut stack: Vec<(&'a str, usize)> = vec![(root, 0)];

    loop {
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let (node, idx) = (frame.0, frame.1);
        let deps = hypothetical_edges(graph, edited, candidate_deps, node);

        if idx < deps.len() {
            frame.1 += 1;
            let next = deps[idx].as_str();

            // Membership of the *current path* gates the cycle signal;
            // a merely-visited node is a shared subtree, not a cycle.
            if on_path.contains(next) {
                return true;
            }
            if visited.insert(next) {
                on_path.insert(next);
                stack.push((next, 0));
            }
        } else {
            on_path.remove(node);
            stack.pop();
        }
    }

    false
}
