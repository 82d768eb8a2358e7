// src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical task identifier type used throughout the crate.
///
/// Ids are assigned by the external task store and are opaque here: the
/// engine only relies on equality and their use as map keys.
pub type TaskId = String;

/// Lifecycle status of a task, as stored by the external task store.
///
/// The store (and the original UI) uses the display strings
/// `"Not Started"`, `"In Progress"`, `"Completed"`, `"On Hold"`, so those
/// are the serde names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::NotStarted
    }
}

impl TaskStatus {
    /// Progress percentage shown by the Gantt renderer for this status.
    pub fn progress_percent(self) -> u8 {
        match self {
            TaskStatus::NotStarted => 0,
            TaskStatus::OnHold => 25,
            TaskStatus::InProgress => 50,
            TaskStatus::Completed => 100,
        }
    }

    /// Map a renderer progress value back to a status.
    ///
    /// Inverse mapping used after a drag-to-progress interaction:
    /// `>= 100` is completed, anything above zero is in progress.
    pub fn from_progress(progress: u8) -> Self {
        if progress >= 100 {
            TaskStatus::Completed
        } else if progress > 0 {
            TaskStatus::InProgress
        } else {
            TaskStatus::NotStarted
        }
    }

    /// CSS class the renderer attaches to this task's bar.
    pub fn bar_class(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "bar-not-started",
            TaskStatus::InProgress => "bar-in-progress",
            TaskStatus::Completed => "bar-completed",
            TaskStatus::OnHold => "bar-on-hold",
        }
    }

    /// Lowercase, hyphenated form of the display string.
    pub fn slug(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not-started",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::OnHold => "on-hold",
        }
    }

    /// Display string as stored by the task store.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::OnHold => "On Hold",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "not started" | "not-started" => Ok(TaskStatus::NotStarted),
            "in progress" | "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "on hold" | "on-hold" => Ok(TaskStatus::OnHold),
            other => Err(format!(
                "invalid task status: {other} (expected \"Not Started\", \"In Progress\", \"Completed\" or \"On Hold\")"
            )),
        }
    }
}
