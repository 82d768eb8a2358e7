// src/snapshot/model.rs

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{TaskId, TaskStatus};

/// A task document as delivered by the external store.
///
/// Field names follow the store's camelCase documents. Documents written
/// before dependencies existed carry no `dependencies` field, and older
/// documents use `userName` where newer ones use `ownerName`; both are
/// tolerated here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTask {
    /// Store-assigned document id; immutable once assigned.
    pub id: TaskId,

    #[serde(default)]
    pub title: String,

    /// Person/group the task is grouped under for display.
    ///
    /// Empty means "Unassigned" at the view layer.
    #[serde(default, alias = "userName")]
    pub owner_name: String,

    /// Optional assignee; no effect on scheduling.
    #[serde(default)]
    pub assignee: Option<String>,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[serde(default)]
    pub status: TaskStatus,

    /// Ids of tasks that must be completed before this one is ready.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,

    #[serde(default)]
    pub description: Option<String>,
}

/// A normalized task: the unit of work every derivation operates on.
///
/// `dependencies` is stored as an ordered list but treated as a set by all
/// algorithms; normalization drops duplicates (first occurrence wins) so
/// derived results do not depend on how often the store repeats an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub owner_name: String,
    pub assignee: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TaskStatus,
    pub dependencies: Vec<TaskId>,
    pub description: Option<String>,
}

impl Task {
    /// Calendar-day duration of this task, minimum one day.
    ///
    /// A task that starts and ends on the same day still occupies it, and a
    /// corrupted `end < start` range degrades to one day rather than a
    /// negative weight.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(1)
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

impl From<RawTask> for Task {
    fn from(raw: RawTask) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            owner_name: raw.owner_name,
            assignee: raw.assignee,
            start_date: raw.start_date,
            end_date: raw.end_date,
            status: raw.status,
            dependencies: dedupe_preserving_order(raw.dependencies),
            description: raw.description,
        }
    }
}

/// The full task list as known at one point in time.
///
/// A snapshot is immutable input to every derivation: the store delivers a
/// complete list on each change notification, and anything derived from one
/// snapshot is valid exactly until the next one arrives.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    tasks: Vec<Task>,
}

impl Snapshot {
    /// Normalize raw store documents into a snapshot, preserving store order.
    pub fn from_raw(docs: Vec<RawTask>) -> Self {
        Self {
            tasks: docs.into_iter().map(Task::from).collect(),
        }
    }

    /// Build a snapshot from already-constructed tasks.
    ///
    /// Dependency lists are normalized the same way as for raw documents.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks
                .into_iter()
                .map(|mut task| {
                    task.dependencies = dedupe_preserving_order(task.dependencies);
                    task
                })
                .collect(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn dedupe_preserving_order(deps: Vec<TaskId>) -> Vec<TaskId> {
    let mut seen: HashSet<TaskId> = HashSet::new();
    deps.into_iter().filter(|dep| seen.insert(dep.clone())).collect()
}
