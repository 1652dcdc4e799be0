// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! CLI definition and handlers
//!
//! Defines the command-line interface for slipway.

pub mod graph;
pub mod list;
pub mod run;
pub mod serve;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Asset build pipeline runner
///
/// Bundles and minifies a script, compiles a stylesheet through an external
/// compiler, and copies the artifacts into the distribution directories.
#[derive(Parser, Debug)]
#[clap(
    name = "slipway",
    version,
    about = "Asset build pipeline runner",
    long_about = None,
    after_help = "Examples:\n\
        slipway                     Run the default task\n\
        slipway script              Bundle and minify the script only\n\
        slipway --dry-run           Show the execution plan\n\
        slipway --graph dot         Print the task graph as DOT\n\
        slipway --serve             Serve the output directory over HTTP\n\n\
        Without a config file the built-in defaults apply; see slipway.yaml."
)]
pub struct Cli {
    /// Task to run (defaults to 'default')
    pub task: Option<String>,

    /// Config file (slipway.yaml when omitted; built-in defaults if absent)
    #[clap(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to directory before executing
    #[clap(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Enable verbose output
    #[clap(short, long)]
    pub verbose: bool,

    /// Show what would be done without running any task
    #[clap(long)]
    pub dry_run: bool,

    /// List registered tasks and exit
    #[clap(long, conflicts_with = "graph")]
    pub list: bool,

    /// Print the task graph in the given format and exit
    #[clap(long, value_name = "FORMAT", value_enum)]
    pub graph: Option<GraphFormat>,

    /// Serve the output directory over HTTP instead of building
    #[clap(long, conflicts_with_all = ["list", "graph", "dry_run"])]
    pub serve: bool,

    /// Port for --serve (overrides the configured port)
    #[clap(long, value_name = "PORT", requires = "serve")]
    pub port: Option<u16>,
}

/// Graph output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    Text,
    Dot,
    Mermaid,
}

/// Default config file path
pub const DEFAULT_CONFIG: &str = "slipway.yaml";
