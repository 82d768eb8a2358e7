// src/lib.rs

pub mod cli;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod snapshot;
pub mod types;
pub mod view;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::cli::{CliArgs, Command};
use crate::dag::NextUp;
use crate::engine::Engine;
use crate::errors::TaskdagError;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - snapshot loading + audit
/// - the engine (graph + cached derivations)
/// - per-subcommand report printing
pub fn run(args: CliArgs) -> Result<()> {
    let snapshot = snapshot::loader::load_and_audit(&args.snapshot)?;
    let engine = Engine::new(&snapshot);
    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    info!(tasks = engine.graph().len(), %today, "snapshot ingested");

    match args.command {
        Command::Report => print_report(&engine),
        Command::Next => print_next(&engine, today),
        Command::Cascade { task, new_end } => print_cascade(&engine, &task, new_end)?,
        Command::Check { task, deps, start } => {
            print_check(&engine, task.as_deref(), &deps, start)
        }
    }

    Ok(())
}

/// Owner-grouped overview with readiness and critical-path markers.
fn print_report(engine: &Engine) {
    let graph = engine.graph();

    if graph.is_empty() {
        println!("no tasks in snapshot");
        return;
    }

    let critical = engine.critical_path();
    let lengths = dag::path_lengths(graph);

    for (owner, tasks) in view::group_by_owner(graph) {
        println!("{owner} ({} task(s)):", tasks.len());
        for task in tasks {
            let mut markers: Vec<String> = Vec::new();
            if critical.contains(&task.id) {
                markers.push("critical".to_string());
            }
            if dag::is_blocked(graph, task) {
                let blockers: Vec<&str> = dag::blocking_tasks(graph, task)
                    .iter()
                    .map(|t| t.title.as_str())
                    .collect();
                markers.push(format!("blocked by {}", blockers.join(", ")));
            } else if !task.is_completed() {
                markers.push("ready".to_string());
            }

            let marker_str = if markers.is_empty() {
                String::new()
            } else {
                format!(" [{}]", markers.join("; "))
            };

            println!(
                "  - {}: {} -> {} ({} day(s), {}){}",
                task.title,
                task.start_date,
                task.end_date,
                task.duration_days(),
                task.status,
                marker_str
            );
        }
        println!();
    }

    let longest: i64 = lengths.values().copied().max().unwrap_or(0);
    println!(
        "critical path: {} task(s), {} day(s)",
        critical.len(),
        longest
    );
}

/// Next-up selection, with the blocked/empty backlogs told apart.
fn print_next(engine: &Engine, today: NaiveDate) {
    match engine.plan_next(today) {
        NextUp::Ready(tasks) => {
            println!("next up ({} candidate(s)):", tasks.len());
            for task in tasks {
                let unblocks = engine.blocked_task_count(&task.id);
                if unblocks > 0 {
                    println!(
                        "  - {} (starts {}, unblocks {} downstream task(s))",
                        task.title, task.start_date, unblocks
                    );
                } else {
                    println!("  - {} (starts {})", task.title, task.start_date);
                }
            }
        }
        NextUp::AllBlocked => println!("all remaining work is blocked"),
        NextUp::BacklogEmpty => println!("backlog is empty; nothing left to do"),
    }
}

/// Preview of the knock-on shifts from one task's end date moving.
fn print_cascade(engine: &Engine, task_id: &str, new_end: NaiveDate) -> Result<()> {
    let task = engine
        .lookup(task_id)
        .ok_or_else(|| TaskdagError::TaskNotFound(task_id.to_string()))?;

    let old_end = task.end_date;
    let day_shift = (new_end - old_end).num_days();
    let shifts = engine.cascade_shift(task_id, old_end, new_end);

    if shifts.is_empty() {
        if day_shift == 0 {
            println!("end date unchanged; nothing to shift");
        } else {
            println!("no direct dependents to shift");
        }
        return Ok(());
    }

    println!(
        "shifting {} direct dependent(s) by {} day(s):",
        shifts.len(),
        day_shift
    );
    for shift in &shifts {
        println!(
            "  - {}: {} -> {}",
            shift.task_id, shift.new_start, shift.new_end
        );
    }
    println!("note: dependents of shifted tasks settle on later snapshots");

    Ok(())
}

/// Edit validation: hard cycle verdict plus the advisory schedule warning.
fn print_check(
    engine: &Engine,
    task_id: Option<&str>,
    deps: &[String],
    start: Option<NaiveDate>,
) {
    let check = engine.check_edit(task_id, deps, start);

    if check.creates_cycle {
        println!("rejected: this dependency set would create a cycle");
    } else {
        println!("ok: no cycle");
    }

    if let Some(overlap) = check.starts_before_dependency {
        println!(
            "warning: start date precedes the end of dependency '{}' ({})",
            overlap.dependency_id, overlap.dependency_end
        );
    }
}
