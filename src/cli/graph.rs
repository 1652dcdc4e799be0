// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Graph handler - print the task graph

use miette::Result;
use std::path::PathBuf;

use super::GraphFormat;
use crate::pipeline::{TaskGraph, TaskRegistry};
use crate::tasks::GroupTask;

/// Print the task graph in the requested format
pub async fn run(
    task: Option<String>,
    config_path: Option<PathBuf>,
    format: GraphFormat,
) -> Result<()> {
    let config = super::run::load_config(config_path)?;
    config.validate()?;

    let registry = TaskRegistry::from_config(&config);
    let graph = TaskGraph::build(&registry)?;

    let output = match format {
        GraphFormat::Text => {
            let target = task.as_deref().unwrap_or(GroupTask::DEFAULT);
            graph.to_text(target)?
        }
        GraphFormat::Dot => graph.to_dot(),
        GraphFormat::Mermaid => graph.to_mermaid(),
    };

    print!("{}", output);

    Ok(())
}
