// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Stylesheet copy task
//!
//! Copies the stylesheet the external compiler is expected to have produced
//! into the distribution directory, preserving the filename. The missing
//! source case is the only signal that the compiler wrote nothing or wrote
//! to an unexpected path.

use async_trait::async_trait;

use super::{Task, TaskContext, TaskOutput};
use crate::config::StylesConfig;
use crate::errors::SlipwayError;

/// Distribution copy task, depends on the stylesheet compiler task
pub struct CopyTask {
    config: StylesConfig,
    dependencies: Vec<String>,
}

impl CopyTask {
    /// Task name in the registry
    pub const NAME: &'static str = "styles";

    pub fn new(config: StylesConfig) -> Self {
        Self {
            config,
            dependencies: vec![super::StylesTask::NAME.to_string()],
        }
    }
}

#[async_trait]
impl Task for CopyTask {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    async fn run(&self, ctx: &TaskContext) -> Result<TaskOutput, SlipwayError> {
        let source = ctx.working_dir.join(&self.config.file);
        if !source.exists() {
            return Err(SlipwayError::FileNotFound {
                path: source,
                help: Some(format!(
                    "Expected output of task '{}' ({}). The compiler may have \
                     written nothing or written to a different path.",
                    super::StylesTask::NAME,
                    self.config.command,
                )),
            });
        }

        let file_name = self.config.file.file_name().ok_or_else(|| {
            SlipwayError::InvalidConfig {
                reason: "styles.file does not name a file".to_string(),
                help: None,
            }
        })?;

        let dist_dir = ctx.working_dir.join(&self.config.dist_dir);
        tokio::fs::create_dir_all(&dist_dir)
            .await
            .map_err(|e| SlipwayError::FileWriteError {
                path: dist_dir.clone(),
                error: e.to_string(),
            })?;

        let dest = dist_dir.join(file_name);
        tokio::fs::copy(&source, &dest)
            .await
            .map_err(|e| SlipwayError::FileWriteError {
                path: dest.clone(),
                error: e.to_string(),
            })?;

        Ok(TaskOutput::success(String::new(), String::new(), vec![dest]))
    }
}
