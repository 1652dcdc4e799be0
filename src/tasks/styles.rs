// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Stylesheet compilation task
//!
//! Runs the configured stylesheet compiler command through the shell and
//! waits for it to exit. The command's stdout and stderr are captured and
//! forwarded verbatim into the build log by the runner; the files it writes
//! are opaque to slipway. Succeeds iff the process exits with status zero.

use async_trait::async_trait;
use tokio::process::Command;

use super::{Task, TaskContext, TaskOutput};
use crate::config::StylesConfig;
use crate::errors::SlipwayError;

/// External stylesheet compiler task
pub struct StylesTask {
    config: StylesConfig,
}

impl StylesTask {
    /// Task name in the registry
    pub const NAME: &'static str = "compile-styles";

    pub fn new(config: StylesConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Task for StylesTask {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn dependencies(&self) -> &[String] {
        &[]
    }

    async fn run(&self, ctx: &TaskContext) -> Result<TaskOutput, SlipwayError> {
        let mut cmd = Command::new(&self.config.shell);
        cmd.arg("-c").arg(&self.config.command);
        cmd.current_dir(&ctx.working_dir);
        cmd.envs(&ctx.env);

        tracing::debug!("running stylesheet compiler: {}", self.config.command);

        let output = cmd
            .output()
            .await
            .map_err(|e| SlipwayError::ToolExecutionFailed {
                tool: self.config.shell.clone(),
                error: e.to_string(),
                help: Some(format!("Shell '{}' may not be available", self.config.shell)),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(TaskOutput::success(stdout, stderr, vec![]))
        } else {
            Ok(TaskOutput::failure(
                stdout,
                stderr,
                output.status.code().unwrap_or(-1),
            ))
        }
    }
}
