//! Manifest schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// A declaration manifest (`tofukit.yml`).
///
/// Kits and projects stay as raw values so that each one is decoded, and
/// can fail, on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    pub settings: Settings,
    pub kits: Vec<Value>,
    pub projects: Vec<Value>,
}

/// Output settings shared by every project in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Encoding of written documents: json, yaml or markdown
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Directory receiving `project-<name>.<ext>` files
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_output_format() -> String {
    "json".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(".tofukit")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            output_path: default_output_path(),
        }
    }
}

impl Settings {
    /// Apply command-line or environment overrides on top of these settings.
    pub fn with_overrides(mut self, format: Option<&str>, path: Option<PathBuf>) -> Self {
        if let Some(format) = format {
            self.output_format = format.to_string();
        }
        if let Some(path) = path {
            self.output_path = path;
        }
        self
    }
}
