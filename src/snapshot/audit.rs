// src/snapshot/audit.rs

//! Advisory corruption audit for snapshots.
//!
//! The task store is externally owned, so a snapshot can arrive with
//! dependency ids pointing at deleted tasks, stored cycles, or date ranges
//! that violate the editing rules. None of that is fatal to the engine:
//! every derivation tolerates it and returns a best-effort result. The
//! audit exists so the host can log what it is tolerating.

use std::collections::HashSet;
use std::fmt;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::snapshot::model::Snapshot;
use crate::types::TaskId;

/// A single advisory finding about a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotIssue {
    /// Two documents share an id; the later one wins in the graph.
    DuplicateId { id: TaskId },
    /// Display invariant violation; has no scheduling effect.
    EmptyTitle { task: TaskId },
    /// `end_date < start_date`; duration degrades to one day.
    EndBeforeStart { task: TaskId },
    /// A task lists itself as a dependency.
    SelfDependency { task: TaskId },
    /// A dependency id with no matching task; treated as satisfied.
    UnknownDependency { task: TaskId, dependency: TaskId },
    /// The stored dependencies contain a cycle; chain walks are guarded
    /// and their results over the cyclic region are best-effort.
    DependencyCycle { task: TaskId },
}

impl fmt::Display for SnapshotIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotIssue::DuplicateId { id } => {
                write!(f, "duplicate task id '{id}'; the later document wins")
            }
            SnapshotIssue::EmptyTitle { task } => {
                write!(f, "task '{task}' has an empty title")
            }
            SnapshotIssue::EndBeforeStart { task } => {
                write!(f, "task '{task}' ends before it starts")
            }
            SnapshotIssue::SelfDependency { task } => {
                write!(f, "task '{task}' lists itself as a dependency")
            }
            SnapshotIssue::UnknownDependency { task, dependency } => {
                write!(f, "task '{task}' depends on unknown task '{dependency}'")
            }
            SnapshotIssue::DependencyCycle { task } => {
                write!(
                    f,
                    "cycle in stored dependencies involving task '{task}'"
                )
            }
        }
    }
}

/// Inspect a snapshot and report everything the engine will tolerate.
///
/// Always returns; never rejects the snapshot.
pub fn audit_snapshot(snapshot: &Snapshot) -> Vec<SnapshotIssue> {
    let mut issues = Vec::new();

    let ids: HashSet<&str> = snapshot.iter().map(|t| t.id.as_str()).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    for task in snapshot.iter() {
        if !seen.insert(task.id.as_str()) {
            issues.push(SnapshotIssue::DuplicateId {
                id: task.id.clone(),
            });
        }
        if task.title.trim().is_empty() {
            issues.push(SnapshotIssue::EmptyTitle {
                task: task.id.clone(),
            });
        }
        if task.end_date < task.start_date {
            issues.push(SnapshotIssue::EndBeforeStart {
                task: task.id.clone(),
            });
        }
        for dep in &task.dependencies {
            if dep == &task.id {
                issues.push(SnapshotIssue::SelfDependency {
                    task: task.id.clone(),
                });
            } else if !ids.contains(dep.as_str()) {
                issues.push(SnapshotIssue::UnknownDependency {
                    task: task.id.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }

    // Cycle sweep over the resolved edges.
    //
    // Edge direction: dep -> task. Unresolved ids contribute no edges, and
    // self-edges are already reported above.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for task in snapshot.iter() {
        graph.add_node(task.id.as_str());
    }

    for task in snapshot.iter() {
        for dep in &task.dependencies {
            if dep != &task.id && ids.contains(dep.as_str()) {
                graph.add_edge(dep.as_str(), task.id.as_str(), ());
            }
        }
    }

    // A topological sort fails iff there is a cycle.
    if let Err(cycle) = toposort(&graph, None) {
        issues.push(SnapshotIssue::DependencyCycle {
            task: cycle.node_id().to_string(),
        });
    }

    issues
}
