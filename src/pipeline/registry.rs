// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Task registry
//!
//! An explicit mapping from task name to task, constructed once at startup
//! and passed to the runner. There is no ambient global registration state.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::BuildConfig;
use crate::tasks::{CopyTask, GroupTask, ScriptTask, StylesTask, Task};

/// Registry of build tasks
#[derive(Default)]
pub struct TaskRegistry {
    tasks: HashMap<String, Arc<dyn Task>>,
}

impl TaskRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Construct the built-in four-task registry from configuration.
    ///
    /// Registers `script`, `compile-styles`, `styles` (depending on
    /// `compile-styles`), and `default` (depending on `script` and `styles`).
    pub fn from_config(config: &BuildConfig) -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(ScriptTask::new(config.script.clone())));
        registry.register(Arc::new(StylesTask::new(config.styles.clone())));
        registry.register(Arc::new(CopyTask::new(config.styles.clone())));
        registry.register(Arc::new(GroupTask::new(
            GroupTask::DEFAULT,
            vec![ScriptTask::NAME.to_string(), CopyTask::NAME.to_string()],
        )));

        registry
    }

    /// Register a task under its own name, replacing any previous entry
    pub fn register(&mut self, task: Arc<dyn Task>) {
        self.tasks.insert(task.name().to_string(), task);
    }

    /// Look up a task by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Task>> {
        self.tasks.get(name)
    }

    /// Whether a task with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Registered task names, sorted for stable output
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tasks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
