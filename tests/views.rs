// tests/views.rs
mod common;
use crate::common::builders::{SnapshotBuilder, TaskBuilder};
use crate::common::init_tracing;

use taskdag::dag::TaskGraph;
use taskdag::types::TaskStatus;
use taskdag::view::{gantt_rows, group_by_owner, UNASSIGNED_GROUP};

#[test]
fn status_progress_and_class_mappings() {
    init_tracing();

    assert_eq!(TaskStatus::NotStarted.progress_percent(), 0);
    assert_eq!(TaskStatus::OnHold.progress_percent(), 25);
    assert_eq!(TaskStatus::InProgress.progress_percent(), 50);
    assert_eq!(TaskStatus::Completed.progress_percent(), 100);

    assert_eq!(TaskStatus::NotStarted.bar_class(), "bar-not-started");
    assert_eq!(TaskStatus::OnHold.bar_class(), "bar-on-hold");
    assert_eq!(TaskStatus::InProgress.slug(), "in-progress");
    assert_eq!(TaskStatus::Completed.to_string(), "Completed");
}

#[test]
fn progress_maps_back_to_status_after_a_drag() {
    init_tracing();

    assert_eq!(TaskStatus::from_progress(0), TaskStatus::NotStarted);
    assert_eq!(TaskStatus::from_progress(1), TaskStatus::InProgress);
    assert_eq!(TaskStatus::from_progress(99), TaskStatus::InProgress);
    assert_eq!(TaskStatus::from_progress(100), TaskStatus::Completed);
}

#[test]
fn tasks_group_by_owner_with_unassigned_fallback() {
    init_tracing();

    let snapshot = SnapshotBuilder::new()
        .with_task(TaskBuilder::new("a", "A").owner("Zoe").build())
        .with_task(TaskBuilder::new("b", "B").build())
        .with_task(TaskBuilder::new("c", "C").owner("Ada").build())
        .with_task(TaskBuilder::new("d", "D").owner("Zoe").build())
        .build();
    let graph = TaskGraph::from_snapshot(&snapshot);

    let groups = group_by_owner(&graph);
    let owners: Vec<&str> = groups.keys().map(|k| k.as_str()).collect();
    assert_eq!(owners, vec!["Ada", UNASSIGNED_GROUP, "Zoe"]);

    let zoe: Vec<&str> = groups["Zoe"].iter().map(|t| t.id.as_str()).collect();
    assert_eq!(zoe, vec!["a", "d"]);
    assert_eq!(groups[UNASSIGNED_GROUP].len(), 1);
}

#[test]
fn gantt_rows_are_shaped_and_sorted_for_the_widget() {
    init_tracing();

    let snapshot = SnapshotBuilder::new()
        .with_task(
            TaskBuilder::new("late", "Late")
                .dates("2024-05-10", "2024-05-12")
                .status(TaskStatus::InProgress)
                .build(),
        )
        .with_task(
            TaskBuilder::new("early", "Early")
                .dates("2024-05-01", "2024-05-03")
                .status(TaskStatus::Completed)
                .build(),
        )
        .build();
    let graph = TaskGraph::from_snapshot(&snapshot);

    let rows = gantt_rows(graph.tasks());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "early");
    assert_eq!(rows[0].progress, 100);
    assert_eq!(rows[0].custom_class, "bar-completed");
    assert_eq!(rows[1].id, "late");
    assert_eq!(rows[1].progress, 50);
    assert_eq!(rows[1].name, "Late");
}
