// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Build configuration
//!
//! Defines the schema for slipway.yaml files. Every field has a default, so
//! a missing or empty config file yields a fully usable configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::errors::SlipwayError;

/// Build configuration from slipway.yaml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Extra environment variables for every task body
    #[serde(default)]
    pub env: HashMap<String, String>,

    /// Script task configuration
    #[serde(default)]
    pub script: ScriptConfig,

    /// Stylesheet task configuration
    #[serde(default)]
    pub styles: StylesConfig,

    /// Dev server configuration
    #[serde(default)]
    pub serve: ServeConfig,
}

impl BuildConfig {
    /// Load configuration from a YAML file.
    ///
    /// When `explicit` is false a missing file falls back to the built-in
    /// defaults; an explicitly requested file must exist.
    pub fn load(path: &Path, explicit: bool) -> Result<Self, SlipwayError> {
        if !path.exists() {
            if explicit {
                return Err(SlipwayError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            tracing::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| SlipwayError::FileReadError {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, SlipwayError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(Into::into)
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> Result<String, SlipwayError> {
        serde_yaml::to_string(self).map_err(Into::into)
    }

    /// Check the configuration for values that cannot drive a build
    pub fn validate(&self) -> Result<(), SlipwayError> {
        if self.script.bundle_name.is_empty() {
            return Err(invalid("script.bundle_name is empty"));
        }
        if self.script.source.file_name().is_none() {
            return Err(invalid("script.source does not name a file"));
        }
        if self.script.bundler.program.is_empty() {
            return Err(invalid("script.bundler.program is empty"));
        }
        if self.script.minifier.program.is_empty() {
            return Err(invalid("script.minifier.program is empty"));
        }
        if self.styles.command.is_empty() {
            return Err(invalid("styles.command is empty"));
        }
        if self.styles.shell.is_empty() {
            return Err(invalid("styles.shell is empty"));
        }
        if self.styles.file.file_name().is_none() {
            return Err(invalid("styles.file does not name a file"));
        }
        if self.serve.host.is_empty() {
            return Err(invalid("serve.host is empty"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> SlipwayError {
    SlipwayError::InvalidConfig {
        reason: reason.to_string(),
        help: None,
    }
}

/// Configuration for the `script` task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
    /// Source file handed to the bundler
    #[serde(default = "default_script_source")]
    pub source: PathBuf,

    /// Directory the minified bundle is written into
    #[serde(default = "default_script_out_dir")]
    pub out_dir: PathBuf,

    /// Filename of the written bundle
    #[serde(default = "default_bundle_name")]
    pub bundle_name: String,

    /// Bundler command; receives the source path as its final argument and
    /// must emit the bundle on stdout
    #[serde(default = "default_bundler")]
    pub bundler: CommandSpec,

    /// Minifier command; reads the bundle on stdin and emits the minified
    /// script on stdout
    #[serde(default = "default_minifier")]
    pub minifier: CommandSpec,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            source: default_script_source(),
            out_dir: default_script_out_dir(),
            bundle_name: default_bundle_name(),
            bundler: default_bundler(),
            minifier: default_minifier(),
        }
    }
}

fn default_script_source() -> PathBuf {
    PathBuf::from("src/Main.elm")
}

fn default_script_out_dir() -> PathBuf {
    PathBuf::from("dist/js")
}

fn default_bundle_name() -> String {
    "bundle.js".to_string()
}

fn default_bundler() -> CommandSpec {
    CommandSpec {
        program: "esbuild".to_string(),
        args: vec!["--bundle".to_string()],
    }
}

fn default_minifier() -> CommandSpec {
    CommandSpec {
        program: "esbuild".to_string(),
        args: vec!["--minify".to_string(), "--loader=js".to_string()],
    }
}

/// Configuration for the stylesheet tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StylesConfig {
    /// Command line run through the shell by the `compile-styles` task
    #[serde(default = "default_styles_command")]
    pub command: String,

    /// Shell used to run the command
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Stylesheet the external command is expected to produce; the `styles`
    /// task copies it into `dist_dir` preserving the filename
    #[serde(default = "default_styles_file")]
    pub file: PathBuf,

    /// Stylesheet distribution directory
    #[serde(default = "default_styles_dist_dir")]
    pub dist_dir: PathBuf,
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            command: default_styles_command(),
            shell: default_shell(),
            file: default_styles_file(),
            dist_dir: default_styles_dist_dir(),
        }
    }
}

fn default_styles_command() -> String {
    "elm-css src/Stylesheets.elm --output src/".to_string()
}

fn default_shell() -> String {
    "sh".to_string()
}

fn default_styles_file() -> PathBuf {
    PathBuf::from("src/main.css")
}

fn default_styles_dist_dir() -> PathBuf {
    PathBuf::from("dist/css")
}

/// Configuration for the dev server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    /// Directory served over HTTP
    #[serde(default = "default_serve_dir")]
    pub dir: PathBuf,

    /// Bind address
    #[serde(default = "default_serve_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_serve_port")]
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            dir: default_serve_dir(),
            host: default_serve_host(),
            port: default_serve_port(),
        }
    }
}

fn default_serve_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_serve_host() -> String {
    "0.0.0.0".to_string()
}

fn default_serve_port() -> u16 {
    8000
}

/// An external program with fixed arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSpec {
    /// Program name or path, resolved via PATH
    pub program: String,

    /// Arguments passed before any per-invocation arguments
    #[serde(default)]
    pub args: Vec<String>,
}
