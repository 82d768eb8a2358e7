// tests/engine_cache.rs
mod common;
use crate::common::builders::{SnapshotBuilder, TaskBuilder};
use crate::common::init_tracing;

use chrono::NaiveDate;

use taskdag::engine::Engine;
use taskdag::types::TaskStatus;

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn derivations_are_answered_from_the_current_snapshot() {
    init_tracing();

    let snapshot = SnapshotBuilder::new()
        .with_task(
            TaskBuilder::new("a", "A")
                .dates("2024-01-01", "2024-01-10")
                .status(TaskStatus::InProgress)
                .build(),
        )
        .with_task(
            TaskBuilder::new("b", "B")
                .dates("2024-01-11", "2024-01-12")
                .depends_on("a")
                .build(),
        )
        .build();
    let engine = Engine::new(&snapshot);

    assert_eq!(engine.is_ready("a"), Some(true));
    assert_eq!(engine.is_ready("b"), Some(false));
    assert_eq!(engine.is_blocked("b"), Some(true));
    assert_eq!(engine.is_ready("ghost-id"), None);
    assert_eq!(engine.blocking_tasks("b")[0].id, "a");
    assert!(engine.blocking_tasks("ghost-id").is_empty());

    assert!(engine.is_critical("a"));
    assert_eq!(engine.blocked_task_count("a"), 1);

    let next = engine.next_tasks(day("2024-06-01"));
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].id, "a");
}

#[test]
fn ingest_invalidates_cached_derivations_wholesale() {
    init_tracing();

    let first = SnapshotBuilder::new()
        .with_task(TaskBuilder::new("a", "A").dates("2024-01-01", "2024-01-10").build())
        .with_task(TaskBuilder::new("b", "B").dates("2024-01-01", "2024-01-02").build())
        .build();
    let mut engine = Engine::new(&first);

    // Prime the cache.
    assert!(engine.is_critical("a"));
    assert!(!engine.is_critical("b"));

    // b grows much longer in the next snapshot; the cached critical path
    // must not survive the ingest.
    let second = SnapshotBuilder::new()
        .with_task(TaskBuilder::new("a", "A").dates("2024-01-01", "2024-01-10").build())
        .with_task(TaskBuilder::new("b", "B").dates("2024-01-01", "2024-01-31").build())
        .build();
    engine.ingest(&second);

    assert!(!engine.is_critical("a"));
    assert!(engine.is_critical("b"));
}

#[test]
fn cascade_preview_runs_against_the_engine_graph() {
    init_tracing();

    let snapshot = SnapshotBuilder::new()
        .with_task(TaskBuilder::new("x", "X").dates("2024-02-01", "2024-02-10").build())
        .with_task(
            TaskBuilder::new("y", "Y")
                .dates("2024-02-11", "2024-02-14")
                .depends_on("x")
                .build(),
        )
        .build();
    let engine = Engine::new(&snapshot);

    let shifts = engine.cascade_shift("x", day("2024-02-10"), day("2024-02-15"));
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].new_start, day("2024-02-16"));

    let check = engine.check_edit(Some("x"), &["y".to_string()], None);
    assert!(check.creates_cycle);
}
