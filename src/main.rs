// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! slipway - Asset build pipeline runner

use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slipway::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slipway=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Change to specified directory if provided
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir).map_err(|e| {
            miette::miette!("Failed to change to directory '{}': {}", dir.display(), e)
        })?;
    }

    if cli.serve {
        return slipway::cli::serve::run(cli.config, cli.port).await;
    }

    if let Some(format) = cli.graph {
        return slipway::cli::graph::run(cli.task, cli.config, format).await;
    }

    if cli.list {
        return slipway::cli::list::run(cli.config).await;
    }

    slipway::cli::run::run(cli.task, cli.config, cli.dry_run, cli.verbose).await
}
