// src/dag/graph.rs

use std::collections::HashMap;

use tracing::warn;

use crate::snapshot::model::{Snapshot, Task};
use crate::types::TaskId;

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone)]
struct TaskNode {
    /// Direct dependencies: tasks that must complete before this one is ready.
    deps: Vec<TaskId>,
    /// Direct dependents: tasks that list this one as a dependency.
    dependents: Vec<TaskId>,
}

/// In-memory task graph for one snapshot, keyed by task id.
///
/// Nodes are tasks; a directed edge `A -> B` exists whenever `B` lists
/// `A.id` in its dependencies. The graph owns a copy of its tasks and is
/// rebuilt from scratch on every ingest, never patched incrementally.
///
/// Dependency ids are *not* required to resolve: the store may deliver a
/// task whose prerequisite has been deleted, so `lookup` fails silently and
/// accessors return empty views for unknown ids.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    tasks: HashMap<TaskId, Task>,
    nodes: HashMap<TaskId, TaskNode>,
    /// Snapshot order of the ids, so every list-returning derivation is
    /// deterministic across runs.
    order: Vec<TaskId>,
}

impl TaskGraph {
    /// Build the graph from a snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut tasks: HashMap<TaskId, Task> = HashMap::new();
        let mut order: Vec<TaskId> = Vec::new();

        for task in snapshot.iter() {
            if tasks.insert(task.id.clone(), task.clone()).is_none() {
                order.push(task.id.clone());
            } else {
                warn!(id = %task.id, "duplicate task id in snapshot; keeping the later document");
            }
        }

        // First pass: create nodes with their (already deduplicated)
        // dependency lists.
        let mut nodes: HashMap<TaskId, TaskNode> = HashMap::new();
        for id in &order {
            let deps = tasks
                .get(id)
                .map(|t| t.dependencies.clone())
                .unwrap_or_default();
            nodes.insert(
                id.clone(),
                TaskNode {
                    deps,
                    dependents: Vec::new(),
                },
            );
        }

        // Second pass: populate dependents, walking in snapshot order so
        // the reverse adjacency lists are deterministic.
        for id in &order {
            let deps = nodes
                .get(id)
                .map(|n| n.deps.clone())
                .unwrap_or_default();

            for dep in deps {
                if let Some(dep_node) = nodes.get_mut(&dep) {
                    dep_node.dependents.push(id.clone());
                }
            }
        }

        Self {
            tasks,
            nodes,
            order,
        }
    }

    /// Look up a task by id. A missing id is `None`, never an error:
    /// dependency ids can point to deleted tasks.
    pub fn lookup(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Immediate dependency ids of a task (may include unresolved ids).
    pub fn dependencies_of(&self, id: &str) -> &[TaskId] {
        self.nodes
            .get(id)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Ids of tasks that list `id` as a dependency, in snapshot order.
    pub fn dependents_of(&self, id: &str) -> &[TaskId] {
        self.nodes
            .get(id)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Direct dependencies of a task as resolved references.
    ///
    /// Unresolved ids are silently dropped; dependency-list order is kept.
    pub fn resolved_dependencies(&self, id: &str) -> Vec<&Task> {
        self.dependencies_of(id)
            .iter()
            .filter_map(|dep| self.tasks.get(dep))
            .collect()
    }

    /// Direct dependents of a task as resolved references, snapshot order.
    pub fn dependent_tasks(&self, id: &str) -> Vec<&Task> {
        self.dependents_of(id)
            .iter()
            .filter_map(|dep| self.tasks.get(dep))
            .collect()
    }

    /// All tasks, in snapshot order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|id| self.tasks.get(id))
    }

    /// All task ids, in snapshot order.
    pub fn task_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|id| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
