// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! # slipway - Asset build pipeline runner
//!
//! `slipway` drives a small dependency graph of four build tasks:
//!
//! - **`script`** - bundle one source file, minify the bundle, write it into
//!   the script distribution directory
//! - **`compile-styles`** - run an external stylesheet compiler and forward
//!   its output into the build log
//! - **`styles`** - copy the generated stylesheet into the stylesheet
//!   distribution directory
//! - **`default`** - run `script` and `styles`
//!
//! Tasks are registered once at startup in an explicit [`TaskRegistry`];
//! the runner resolves the requested task's transitive closure, rejects
//! cycles and unknown dependencies before anything runs, and executes each
//! member exactly once in dependency order.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the full build
//! slipway
//!
//! # Bundle the script only
//! slipway script
//!
//! # Show the plan without running anything
//! slipway --dry-run
//!
//! # Preview the build output over HTTP
//! slipway --serve
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod pipeline;
pub mod server;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::BuildConfig;
pub use errors::{SlipwayError, SlipwayResult};
pub use pipeline::{RunOptions, RunResult, Runner, TaskGraph, TaskRegistry};
pub use tasks::{Task, TaskContext, TaskOutput};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
