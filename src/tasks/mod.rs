// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Build tasks
//!
//! This module provides the task trait and the four built-in task bodies
//! (script bundling, stylesheet compilation, stylesheet copy, and the
//! body-less default group).

mod copy;
mod group;
mod script;
mod styles;

pub use copy::CopyTask;
pub use group::GroupTask;
pub use script::ScriptTask;
pub use styles::StylesTask;

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::errors::SlipwayError;

/// Context shared by every task body in one run
#[derive(Debug, Clone)]
pub struct TaskContext {
    /// Directory all relative paths resolve against
    pub working_dir: PathBuf,

    /// Environment variables added to every spawned process
    pub env: HashMap<String, String>,
}

impl TaskContext {
    /// Create a context rooted at the given directory
    pub fn new(working_dir: PathBuf, env: HashMap<String, String>) -> Self {
        Self { working_dir, env }
    }
}

/// Result of running a task body.
///
/// A non-zero exit from an invoked external process is an unsuccessful
/// output, not an `Err`; `Err` is reserved for structural problems such as a
/// missing source file or a tool that could not be spawned at all.
#[derive(Debug, Clone)]
pub struct TaskOutput {
    /// Whether the body succeeded
    pub success: bool,

    /// Captured standard output, forwarded to the build log
    pub stdout: String,

    /// Captured standard error, forwarded to the build log
    pub stderr: String,

    /// Exit code of the failing process, zero on success
    pub exit_code: i32,

    /// Files written by the task
    pub outputs: Vec<PathBuf>,
}

impl TaskOutput {
    /// Create a successful output
    pub fn success(stdout: String, stderr: String, outputs: Vec<PathBuf>) -> Self {
        Self {
            success: true,
            stdout,
            stderr,
            exit_code: 0,
            outputs,
        }
    }

    /// Create a failed output
    pub fn failure(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self {
            success: false,
            stdout,
            stderr,
            exit_code,
            outputs: vec![],
        }
    }

    /// Successful output with nothing to report
    pub fn empty() -> Self {
        Self::success(String::new(), String::new(), vec![])
    }
}

/// Trait for build tasks
#[async_trait]
pub trait Task: Send + Sync {
    /// Task name, unique within a registry
    fn name(&self) -> &str;

    /// Names of tasks that must complete successfully before this one starts
    fn dependencies(&self) -> &[String];

    /// Execute the task body
    async fn run(&self, ctx: &TaskContext) -> Result<TaskOutput, SlipwayError>;
}
