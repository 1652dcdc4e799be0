// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Script task
//!
//! Bundles one designated source file, minifies the bundle, and writes the
//! result into the script distribution directory. The bundler and minifier
//! are opaque external commands: the bundler is handed the source path and
//! must emit the bundle on stdout, the minifier reads the bundle on stdin
//! and emits the minified script on stdout. The output file is only written
//! after both commands have succeeded.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::{Task, TaskContext, TaskOutput};
use crate::config::{CommandSpec, ScriptConfig};
use crate::errors::SlipwayError;

/// Bundle-and-minify task
pub struct ScriptTask {
    config: ScriptConfig,
}

impl ScriptTask {
    /// Task name in the registry
    pub const NAME: &'static str = "script";

    pub fn new(config: ScriptConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Task for ScriptTask {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn dependencies(&self) -> &[String] {
        &[]
    }

    async fn run(&self, ctx: &TaskContext) -> Result<TaskOutput, SlipwayError> {
        let source = ctx.working_dir.join(&self.config.source);
        if !source.exists() {
            return Err(SlipwayError::file_not_found_in_task(source, Self::NAME));
        }

        which::which(&self.config.bundler.program)
            .map_err(|_| SlipwayError::tool_not_found(&self.config.bundler.program))?;
        which::which(&self.config.minifier.program)
            .map_err(|_| SlipwayError::tool_not_found(&self.config.minifier.program))?;

        // Bundle: the artifact stays in memory until minification succeeds
        let bundler = &self.config.bundler;
        let mut cmd = Command::new(&bundler.program);
        cmd.args(&bundler.args);
        cmd.arg(&source);
        cmd.current_dir(&ctx.working_dir);
        cmd.envs(&ctx.env);

        let bundled = cmd
            .output()
            .await
            .map_err(|e| spawn_error(bundler, e))?;

        if !bundled.status.success() {
            tracing::debug!("bundler exited non-zero: {}", bundled.status);
            return Ok(TaskOutput::failure(
                String::from_utf8_lossy(&bundled.stdout).to_string(),
                String::from_utf8_lossy(&bundled.stderr).to_string(),
                bundled.status.code().unwrap_or(-1),
            ));
        }

        // Minify via stdin so a minifier failure leaves no file behind
        let minifier = &self.config.minifier;
        let mut cmd = Command::new(&minifier.program);
        cmd.args(&minifier.args);
        cmd.current_dir(&ctx.working_dir);
        cmd.envs(&ctx.env);
        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|e| spawn_error(minifier, e))?;

        let mut stdin = child.stdin.take().ok_or_else(|| SlipwayError::Io {
            message: format!("stdin of '{}' was not captured", minifier.program),
        })?;

        // Feed stdin while draining stdout, or a large bundle can deadlock
        // on full pipe buffers.
        let bundle = bundled.stdout;
        let feed = async move {
            stdin.write_all(&bundle).await?;
            drop(stdin);
            Ok::<_, std::io::Error>(())
        };
        let (fed, minified) = tokio::join!(feed, child.wait_with_output());
        fed?;
        let minified = minified.map_err(|e| spawn_error(minifier, e))?;

        if !minified.status.success() {
            return Ok(TaskOutput::failure(
                String::from_utf8_lossy(&minified.stdout).to_string(),
                String::from_utf8_lossy(&minified.stderr).to_string(),
                minified.status.code().unwrap_or(-1),
            ));
        }

        let out_dir = ctx.working_dir.join(&self.config.out_dir);
        tokio::fs::create_dir_all(&out_dir)
            .await
            .map_err(|e| SlipwayError::FileWriteError {
                path: out_dir.clone(),
                error: e.to_string(),
            })?;

        let out_path = out_dir.join(&self.config.bundle_name);
        tokio::fs::write(&out_path, &minified.stdout)
            .await
            .map_err(|e| SlipwayError::FileWriteError {
                path: out_path.clone(),
                error: e.to_string(),
            })?;

        let stderr = [
            String::from_utf8_lossy(&bundled.stderr).to_string(),
            String::from_utf8_lossy(&minified.stderr).to_string(),
        ]
        .concat();

        Ok(TaskOutput::success(String::new(), stderr, vec![out_path]))
    }
}

fn spawn_error(spec: &CommandSpec, e: std::io::Error) -> SlipwayError {
    SlipwayError::ToolExecutionFailed {
        tool: spec.program.clone(),
        error: e.to_string(),
        help: Some(format!("'{}' may not be installed", spec.program)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn stub_config() -> ScriptConfig {
        // `cat` stands in for both commands: the bundler call echoes the
        // source file, the minifier call echoes stdin.
        ScriptConfig {
            source: PathBuf::from("src/app.js"),
            out_dir: PathBuf::from("dist/js"),
            bundle_name: "bundle.js".to_string(),
            bundler: CommandSpec {
                program: "cat".to_string(),
                args: vec![],
            },
            minifier: CommandSpec {
                program: "cat".to_string(),
                args: vec![],
            },
        }
    }

    fn ctx(dir: &std::path::Path) -> TaskContext {
        TaskContext::new(dir.to_path_buf(), HashMap::new())
    }

    #[tokio::test]
    async fn test_bundles_minifies_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/app.js"), "console.log(1);\n").unwrap();

        let task = ScriptTask::new(stub_config());
        let output = task.run(&ctx(dir.path())).await.unwrap();

        assert!(output.success);
        let written = dir.path().join("dist/js/bundle.js");
        assert_eq!(output.outputs, vec![written.clone()]);
        assert_eq!(
            std::fs::read_to_string(written).unwrap(),
            "console.log(1);\n"
        );
    }

    #[tokio::test]
    async fn test_missing_source_fails_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();

        let task = ScriptTask::new(stub_config());
        let err = task.run(&ctx(dir.path())).await.unwrap_err();

        assert!(matches!(err, SlipwayError::FileNotFound { .. }));
        assert!(!dir.path().join("dist/js/bundle.js").exists());
        assert!(!dir.path().join("dist/js").exists());
    }

    #[tokio::test]
    async fn test_bundler_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/app.js"), "x\n").unwrap();

        let mut config = stub_config();
        // `sh -c 'exit 2'` ignores the trailing source argument
        config.bundler = CommandSpec {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), "exit 2".to_string()],
        };

        let task = ScriptTask::new(config);
        let output = task.run(&ctx(dir.path())).await.unwrap();

        assert!(!output.success);
        assert_eq!(output.exit_code, 2);
        assert!(!dir.path().join("dist/js/bundle.js").exists());
    }

    #[tokio::test]
    async fn test_minifier_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/app.js"), "x\n").unwrap();

        let mut config = stub_config();
        config.minifier = CommandSpec {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), "cat > /dev/null; exit 3".to_string()],
        };

        let task = ScriptTask::new(config);
        let output = task.run(&ctx(dir.path())).await.unwrap();

        assert!(!output.success);
        assert_eq!(output.exit_code, 3);
        assert!(!dir.path().join("dist/js/bundle.js").exists());
    }

    #[tokio::test]
    async fn test_rerun_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();

        let task = ScriptTask::new(stub_config());

        std::fs::write(dir.path().join("src/app.js"), "first\n").unwrap();
        task.run(&ctx(dir.path())).await.unwrap();

        std::fs::write(dir.path().join("src/app.js"), "second\n").unwrap();
        task.run(&ctx(dir.path())).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("dist/js/bundle.js")).unwrap(),
            "second\n"
        );
    }
}
