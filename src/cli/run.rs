// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Run handler - resolve and execute a task

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::pipeline::{RunOptions, Runner, TaskRegistry};
use crate::tasks::{GroupTask, TaskContext};

/// Execute the requested task (the default task when none is given)
pub async fn run(
    task: Option<String>,
    config_path: Option<PathBuf>,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    config.validate()?;

    let registry = TaskRegistry::from_config(&config);

    let working_dir = std::env::current_dir()
        .map_err(|e| miette::miette!("Failed to get current directory: {}", e))?;
    let ctx = TaskContext::new(working_dir, config.env.clone());

    let options = RunOptions { dry_run };
    let target = task.as_deref().unwrap_or(GroupTask::DEFAULT);

    let result = Runner::new(&registry).run(target, &ctx, &options).await?;

    if !result.success {
        if let Some((name, report)) = result.first_failure() {
            eprintln!();
            eprintln!("{}", format!("Task '{}' failed:", name).red().bold());
            if let Some(ref error) = report.error {
                eprintln!("  {}", error);
            }
            if let Some(ref output) = report.output {
                if !output.stderr.is_empty() && verbose {
                    eprintln!("{}", output.stderr.dimmed());
                }
            }
        }
        return Err(miette::miette!("Build failed"));
    }

    // Print written artifacts
    let outputs: Vec<_> = result
        .reports
        .iter()
        .filter_map(|(_, r)| r.output.as_ref())
        .flat_map(|o| o.outputs.iter())
        .collect();

    if !outputs.is_empty() {
        println!();
        println!("{}:", "Outputs".bold());
        for output in outputs {
            println!("  - {}", output.display());
        }
    }

    Ok(())
}

/// Load the config file, falling back to defaults when the implicit default
/// path does not exist
pub(crate) fn load_config(config_path: Option<PathBuf>) -> Result<BuildConfig> {
    let (path, explicit) = match config_path {
        Some(path) => (path, true),
        None => (PathBuf::from(super::DEFAULT_CONFIG), false),
    };

    Ok(BuildConfig::load(&path, explicit)?)
}
