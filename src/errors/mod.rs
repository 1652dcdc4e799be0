// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Error types
//!
//! slipway reports failures with enough context to identify which task
//! failed and what the underlying cause was.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for slipway operations
pub type SlipwayResult<T> = Result<T, SlipwayError>;

/// Main error type for slipway
#[derive(Error, Debug, Diagnostic)]
pub enum SlipwayError {
    // ─────────────────────────────────────────────────────────────────────────
    // Task Graph Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Task '{task}' is not registered")]
    #[diagnostic(
        code(slipway::task_not_found),
        help("Run 'slipway --list' to see the registered tasks")
    )]
    TaskNotFound { task: String },

    #[error("Task '{task}' depends on unknown task '{dependency}'")]
    #[diagnostic(
        code(slipway::unknown_dependency),
        help("Check that '{dependency}' is registered before the graph is resolved")
    )]
    UnknownDependency { task: String, dependency: String },

    #[error("Circular dependency detected: {}", tasks.join(" -> "))]
    #[diagnostic(
        code(slipway::circular_dependency),
        help("Review the task dependencies to remove the cycle")
    )]
    CircularDependency { tasks: Vec<String> },

    // ─────────────────────────────────────────────────────────────────────────
    // Tool Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Tool '{tool}' not found")]
    #[diagnostic(code(slipway::tool_not_found), help("{suggestion}"))]
    ToolNotFound { tool: String, suggestion: String },

    #[error("Tool '{tool}' could not be executed: {error}")]
    #[diagnostic(code(slipway::tool_execution_failed))]
    ToolExecutionFailed {
        tool: String,
        error: String,
        #[help]
        help: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // File Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("File not found: {path}")]
    #[diagnostic(code(slipway::file_not_found))]
    FileNotFound {
        path: PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to read file '{path}': {error}")]
    #[diagnostic(code(slipway::file_read_error))]
    FileReadError { path: PathBuf, error: String },

    #[error("Failed to write file '{path}': {error}")]
    #[diagnostic(code(slipway::file_write_error))]
    FileWriteError { path: PathBuf, error: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Config file not found: {path}")]
    #[diagnostic(
        code(slipway::config_not_found),
        help("Create the file, or omit --config to use the built-in defaults")
    )]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {reason}")]
    #[diagnostic(code(slipway::invalid_config))]
    InvalidConfig {
        reason: String,
        #[help]
        help: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // IO/System Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("IO error: {message}")]
    #[diagnostic(code(slipway::io_error))]
    Io { message: String },

    #[error("YAML parsing error: {message}")]
    #[diagnostic(code(slipway::yaml_error))]
    Yaml { message: String },
}

impl From<std::io::Error> for SlipwayError {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            message: e.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SlipwayError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml {
            message: e.to_string(),
        }
    }
}

impl SlipwayError {
    /// Create a tool not found error with an installation suggestion
    pub fn tool_not_found(tool: &str) -> Self {
        let suggestion = match tool {
            "esbuild" => "Install esbuild: https://esbuild.github.io/getting-started/".to_string(),
            "elm-css" => "Install elm-css: https://www.npmjs.com/package/elm-css".to_string(),
            _ => format!("Install {} and ensure it's in your PATH", tool),
        };

        Self::ToolNotFound {
            tool: tool.to_string(),
            suggestion,
        }
    }

    /// Create a file not found error naming the task that required the file
    pub fn file_not_found_in_task(path: PathBuf, task: &str) -> Self {
        Self::FileNotFound {
            path,
            help: Some(format!(
                "Required by task '{}'. Check that the file exists.",
                task
            )),
        }
    }
}
