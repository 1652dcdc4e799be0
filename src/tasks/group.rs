// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Group task
//!
//! A task with no body of its own; it exists to require that its
//! dependencies complete successfully. The built-in `default` task is a
//! group over `script` and `styles`.

use async_trait::async_trait;

use super::{Task, TaskContext, TaskOutput};
use crate::errors::SlipwayError;

/// Body-less task that only aggregates dependencies
pub struct GroupTask {
    name: String,
    dependencies: Vec<String>,
}

impl GroupTask {
    /// Name of the built-in default task
    pub const DEFAULT: &'static str = "default";

    pub fn new(name: impl Into<String>, dependencies: Vec<String>) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }
}

#[async_trait]
impl Task for GroupTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    async fn run(&self, _ctx: &TaskContext) -> Result<TaskOutput, SlipwayError> {
        Ok(TaskOutput::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_group_task_succeeds_with_no_effect() {
        let task = GroupTask::new("default", vec!["script".into(), "styles".into()]);
        let ctx = TaskContext::new(PathBuf::from("."), HashMap::new());

        let output = task.run(&ctx).await.unwrap();

        assert!(output.success);
        assert!(output.outputs.is_empty());
        assert_eq!(task.dependencies(), ["script", "styles"]);
    }
}
