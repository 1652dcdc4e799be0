// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Serve handler - preview the build output over HTTP

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::server;

/// Serve the configured output directory until interrupted
pub async fn run(config_path: Option<PathBuf>, port: Option<u16>) -> Result<()> {
    let config = super::run::load_config(config_path)?;
    config.validate()?;

    let effective_port = port.unwrap_or(config.serve.port);
    println!(
        "{} {} {}",
        "Serving".green().bold(),
        config.serve.dir.display(),
        format!("on http://{}:{}", config.serve.host, effective_port).dimmed()
    );

    server::serve(&config.serve, port).await?;

    Ok(())
}
