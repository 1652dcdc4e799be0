// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Task runner
//!
//! Executes a requested task's transitive closure sequentially in
//! topological order. Each task runs exactly once; a failure marks every
//! not-yet-started dependent as skipped while independent tasks still run
//! and report their own status.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use colored::Colorize;

use crate::errors::SlipwayError;
use crate::pipeline::{TaskGraph, TaskRegistry};
use crate::tasks::{TaskContext, TaskOutput};
use crate::utils::create_spinner;

/// Run options
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Only print the execution plan
    pub dry_run: bool,
}

/// Outcome of one task in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Succeeded,
    Failed,
    /// Not started because a transitive dependency failed
    Skipped,
}

/// Per-task record of a run
#[derive(Debug)]
pub struct TaskReport {
    pub status: TaskStatus,
    /// Body output; absent for skipped tasks and structural errors
    pub output: Option<TaskOutput>,
    /// Structural error raised by the body, if any
    pub error: Option<SlipwayError>,
    pub duration: Duration,
}

/// Result of executing a task closure
#[derive(Debug)]
pub struct RunResult {
    /// Reports in execution order
    pub reports: Vec<(String, TaskReport)>,
    /// Total run time
    pub duration: Duration,
    /// Whether every executed task succeeded
    pub success: bool,
}

impl RunResult {
    /// Report for a task by name
    pub fn report(&self, name: &str) -> Option<&TaskReport> {
        self.reports
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, r)| r)
    }

    /// The first failed task, if any
    pub fn first_failure(&self) -> Option<(&str, &TaskReport)> {
        self.reports
            .iter()
            .find(|(_, r)| r.status == TaskStatus::Failed)
            .map(|(n, r)| (n.as_str(), r))
    }
}

/// Sequential task runner over a registry
pub struct Runner<'a> {
    registry: &'a TaskRegistry,
}

impl<'a> Runner<'a> {
    pub fn new(registry: &'a TaskRegistry) -> Self {
        Self { registry }
    }

    /// Resolve and execute the closure of `task`.
    ///
    /// Resolution errors (unknown task, unknown dependency, cycle) are
    /// returned before any task body runs.
    pub async fn run(
        &self,
        task: &str,
        ctx: &TaskContext,
        options: &RunOptions,
    ) -> Result<RunResult, SlipwayError> {
        let start = Instant::now();

        let graph = TaskGraph::build(self.registry)?;
        let order = graph.execution_order(task)?;

        self.print_plan(task, &order, &graph);

        if options.dry_run {
            return Ok(RunResult {
                reports: Vec::new(),
                duration: start.elapsed(),
                success: true,
            });
        }

        let mut reports: Vec<(String, TaskReport)> = Vec::new();
        let mut status_of: HashMap<String, TaskStatus> = HashMap::new();

        for name in order {
            let task = self
                .registry
                .get(&name)
                .ok_or_else(|| SlipwayError::TaskNotFound { task: name.clone() })?;

            // Dependencies appear earlier in the order; anything other than
            // success there means this body must not start.
            let blocked = task
                .dependencies()
                .iter()
                .any(|dep| status_of.get(dep) != Some(&TaskStatus::Succeeded));

            if blocked {
                println!("  {} {} {}", "○".dimmed(), name.dimmed(), "(skipped)".dimmed());
                status_of.insert(name.clone(), TaskStatus::Skipped);
                reports.push((
                    name,
                    TaskReport {
                        status: TaskStatus::Skipped,
                        output: None,
                        error: None,
                        duration: Duration::ZERO,
                    },
                ));
                continue;
            }

            tracing::debug!("running task '{}'", name);
            let spinner = create_spinner(&name);
            let body_start = Instant::now();
            let result = task.run(ctx).await;
            let duration = body_start.elapsed();
            spinner.finish_and_clear();

            let report = match result {
                Ok(output) if output.success => {
                    println!(
                        "  {} {} ({:.2}s)",
                        "✓".green(),
                        name.bold(),
                        duration.as_secs_f64()
                    );
                    forward_streams(&output);
                    TaskReport {
                        status: TaskStatus::Succeeded,
                        output: Some(output),
                        error: None,
                        duration,
                    }
                }
                Ok(output) => {
                    println!(
                        "  {} {} {}",
                        "✗".red(),
                        name.bold(),
                        format!("(exit code {})", output.exit_code).dimmed()
                    );
                    forward_streams(&output);
                    TaskReport {
                        status: TaskStatus::Failed,
                        output: Some(output),
                        error: None,
                        duration,
                    }
                }
                Err(e) => {
                    println!("  {} {} {}", "✗".red(), name.bold(), "failed".dimmed());
                    eprintln!("    {}", e.to_string().dimmed());
                    TaskReport {
                        status: TaskStatus::Failed,
                        output: None,
                        error: Some(e),
                        duration,
                    }
                }
            };

            status_of.insert(name.clone(), report.status);
            reports.push((name, report));
        }

        let duration = start.elapsed();
        let success = reports
            .iter()
            .all(|(_, r)| r.status == TaskStatus::Succeeded);

        println!();
        if success {
            println!(
                "{}",
                format!("Build completed successfully in {:.2}s", duration.as_secs_f64()).green()
            );
        } else {
            println!(
                "{}",
                format!("Build failed after {:.2}s", duration.as_secs_f64()).red()
            );
        }

        Ok(RunResult {
            reports,
            duration,
            success,
        })
    }

    fn print_plan(&self, task: &str, order: &[String], graph: &TaskGraph) {
        println!();
        println!("{}: {}", "Target".bold(), task);
        println!(
            "Execution plan ({} task{}):",
            order.len(),
            if order.len() == 1 { "" } else { "s" }
        );

        for (i, name) in order.iter().enumerate() {
            let deps = graph.dependencies(name).unwrap_or_default();

            print!("  {}. {}", i + 1, name.bold());
            if !deps.is_empty() {
                print!(" {}", format!("[depends: {}]", deps.join(", ")).dimmed());
            }
            println!();
        }

        println!();
    }
}

/// Forward captured process output verbatim into the build log
fn forward_streams(output: &TaskOutput) {
    if !output.stdout.is_empty() {
        print!("{}", output.stdout);
        if !output.stdout.ends_with('\n') {
            println!();
        }
    }
    if !output.stderr.is_empty() {
        eprint!("{}", output.stderr);
        if !output.stderr.ends_with('\n') {
            eprintln!();
        }
    }
}
