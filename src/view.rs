// src/view.rs

//! Renderer-facing derivations.
//!
//! The rendering layer (Gantt widget, list view) is external; these
//! helpers shape one snapshot into what it consumes: owner-grouped task
//! lists, start-date-ordered rows, and the progress/CSS mappings per
//! status. Pure functions, like everything else derived from a snapshot.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dag::graph::TaskGraph;
use crate::snapshot::model::Task;
use crate::types::TaskId;

/// Group label for tasks whose owner field is empty.
pub const UNASSIGNED_GROUP: &str = "Unassigned";

/// One bar in the Gantt widget's input format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GanttRow {
    pub id: TaskId,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub progress: u8,
    pub custom_class: &'static str,
}

impl GanttRow {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            name: task.title.clone(),
            start: task.start_date,
            end: task.end_date,
            progress: task.status.progress_percent(),
            custom_class: task.status.bar_class(),
        }
    }
}

/// Rows for the Gantt widget, ascending by start date (ties keep input
/// order).
pub fn gantt_rows<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<GanttRow> {
    let mut rows: Vec<GanttRow> = tasks.into_iter().map(GanttRow::from_task).collect();
    rows.sort_by_key(|row| row.start);
    rows
}

/// Tasks grouped by owner for the per-owner chart sections.
///
/// An empty owner lands under [`UNASSIGNED_GROUP`]; groups come out sorted
/// by owner name, tasks within a group in snapshot order.
pub fn group_by_owner(graph: &TaskGraph) -> BTreeMap<String, Vec<&Task>> {
    let mut groups: BTreeMap<String, Vec<&Task>> = BTreeMap::new();

    for task in graph.tasks() {
        let owner = if task.owner_name.is_empty() {
            UNASSIGNED_GROUP.to_string()
        } else {
            task.owner_name.clone()
        };
        groups.entry(owner).or_default().push(task);
    }

    groups
}
