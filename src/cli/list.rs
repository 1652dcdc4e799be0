// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! List handler - show registered tasks

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::pipeline::TaskRegistry;

/// List the registered tasks and their dependencies
pub async fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = super::run::load_config(config_path)?;
    config.validate()?;

    let registry = TaskRegistry::from_config(&config);

    println!("{}:", "Tasks".bold());
    for name in registry.names() {
        let deps = registry
            .get(name)
            .map(|t| t.dependencies().to_vec())
            .unwrap_or_default();

        print!("  {}", name.bold());
        if !deps.is_empty() {
            print!(" {}", format!("[depends: {}]", deps.join(", ")).dimmed());
        }
        println!();
    }

    Ok(())
}
