// src/engine.rs

//! Snapshot-holding engine.
//!
//! [`Engine`] is the host-side seam between the external store and the
//! pure derivations in [`crate::dag`]: it owns the graph built from the
//! most recent snapshot, serves derived views from it, and throws every
//! cached derivation away wholesale when a new snapshot is ingested.
//! Caches are never patched incrementally.
//!
//! The engine is synchronous and performs no I/O; it can be exercised in
//! tests without any runtime, filesystem, or store.

use std::cell::OnceCell;
use std::collections::HashSet;

use chrono::NaiveDate;

use crate::dag::{self, DateShift, EditCheck, NextUp, TaskGraph};
use crate::snapshot::model::{Snapshot, Task};
use crate::types::TaskId;

#[derive(Debug)]
pub struct Engine {
    graph: TaskGraph,
    /// Memoized critical-path set, valid until the next ingest.
    critical_path: OnceCell<HashSet<TaskId>>,
}

impl Engine {
    pub fn new(snapshot: &Snapshot) -> Self {
        Self {
            graph: TaskGraph::from_snapshot(snapshot),
            critical_path: OnceCell::new(),
        }
    }

    /// Replace the current snapshot.
    ///
    /// The graph is rebuilt from scratch and all cached derivations are
    /// invalidated.
    pub fn ingest(&mut self, snapshot: &Snapshot) {
        self.graph = TaskGraph::from_snapshot(snapshot);
        self.critical_path = OnceCell::new();
    }

    /// The graph for the current snapshot.
    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    pub fn lookup(&self, id: &str) -> Option<&Task> {
        self.graph.lookup(id)
    }

    /// Ids on the longest duration-weighted dependency chain, computed at
    /// most once per snapshot.
    pub fn critical_path(&self) -> &HashSet<TaskId> {
        self.critical_path
            .get_or_init(|| dag::critical_path_task_ids(&self.graph))
    }

    pub fn is_critical(&self, id: &str) -> bool {
        self.critical_path().contains(id)
    }

    /// Readiness of the given task, or `None` if the id is unknown.
    pub fn is_ready(&self, id: &str) -> Option<bool> {
        let task = self.graph.lookup(id)?;
        Some(dag::is_ready(&self.graph, task))
    }

    /// Blockedness of the given task, or `None` if the id is unknown.
    pub fn is_blocked(&self, id: &str) -> Option<bool> {
        let task = self.graph.lookup(id)?;
        Some(dag::is_blocked(&self.graph, task))
    }

    /// The incomplete prerequisites of the given task (empty for unknown
    /// ids, which cannot be blocked by anything we can show).
    pub fn blocking_tasks(&self, id: &str) -> Vec<&Task> {
        match self.graph.lookup(id) {
            Some(task) => dag::blocking_tasks(&self.graph, task),
            None => Vec::new(),
        }
    }

    pub fn next_tasks(&self, today: NaiveDate) -> Vec<&Task> {
        dag::next_tasks(&self.graph, today)
    }

    pub fn plan_next(&self, today: NaiveDate) -> NextUp<'_> {
        dag::plan_next(&self.graph, today)
    }

    pub fn blocked_task_count(&self, id: &str) -> usize {
        dag::blocked_task_count(&self.graph, id)
    }

    pub fn cascade_shift(
        &self,
        changed_task_id: &str,
        old_end: NaiveDate,
        new_end: NaiveDate,
    ) -> Vec<DateShift> {
        dag::cascade_shift(&self.graph, changed_task_id, old_end, new_end)
    }

    pub fn check_edit(
        &self,
        task_id: Option<&str>,
        candidate_deps: &[TaskId],
        start_date: Option<NaiveDate>,
    ) -> EditCheck {
        dag::check_edit(&self.graph, task_id, candidate_deps, start_date)
    }
}
