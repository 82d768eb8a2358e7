#![allow(dead_code)]

use chrono::NaiveDate;
use taskdag::snapshot::{Snapshot, Task};
use taskdag::types::TaskStatus;

fn parse_date(s: &str) -> NaiveDate {
    s.parse().expect("valid YYYY-MM-DD date in test fixture")
}

/// Builder for `Task` to simplify test setup.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            task: Task {
                id: id.to_string(),
                title: title.to_string(),
                owner_name: String::new(),
                assignee: None,
                start_date: parse_date("2024-01-01"),
                end_date: parse_date("2024-01-02"),
                status: TaskStatus::NotStarted,
                dependencies: vec![],
                description: None,
            },
        }
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.task.owner_name = owner.to_string();
        self
    }

    pub fn assignee(mut self, assignee: &str) -> Self {
        self.task.assignee = Some(assignee.to_string());
        self
    }

    pub fn dates(mut self, start: &str, end: &str) -> Self {
        self.task.start_date = parse_date(start);
        self.task.end_date = parse_date(end);
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.task.status = status;
        self
    }

    pub fn depends_on(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.task.description = Some(text.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for `Snapshot`.
pub struct SnapshotBuilder {
    tasks: Vec<Task>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn build(self) -> Snapshot {
        Snapshot::from_tasks(self.tasks)
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
