// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Task graph resolution and execution
//!
//! This module defines the task registry, the dependency graph built over
//! it, and the runner that executes a requested task's transitive closure
//! in dependency order.

mod graph;
mod registry;
mod runner;

pub use graph::TaskGraph;
pub use registry::TaskRegistry;
pub use runner::{RunOptions, RunResult, Runner, TaskReport, TaskStatus};
