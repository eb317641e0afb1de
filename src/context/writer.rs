//! Atomic persistence of project context documents.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::format::OutputFormat;
use crate::aggregate::AggregatedProject;
use crate::catalog::is_valid_name;
use crate::config::Settings;
use crate::error::{Result, TofukitError};

/// Writes one document per project into an output directory.
///
/// Documents are rendered fully in memory, written to a hidden temporary
/// file next to the target, then renamed over it. Readers see either the
/// previous document or the new one, never a partial write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWriter {
    output_dir: PathBuf,
    format: OutputFormat,
}

impl ContextWriter {
    /// Create a writer for the given directory and format.
    pub fn new(output_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
        }
    }

    /// Create a writer from resolved settings.
    ///
    /// Fails with [`UnsupportedFormat`](crate::TofukitError::UnsupportedFormat)
    /// when the configured format is unknown.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let format = settings.output_format.parse::<OutputFormat>()?;
        Ok(Self::new(settings.output_path.clone(), format))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// File name for a project's document (`project-<name>.<ext>`).
    pub fn file_name(&self, project_name: &str) -> String {
        format!("project-{}.{}", project_name, self.format.extension())
    }

    /// Full path of a project's document.
    pub fn path_for(&self, project_name: &str) -> PathBuf {
        self.output_dir.join(self.file_name(project_name))
    }

    /// Render and atomically write a project's document.
    ///
    /// Returns the path written. Invalid project names and rendering errors
    /// leave the file system untouched.
    pub fn write(&self, aggregated: &AggregatedProject) -> Result<PathBuf> {
        let name = aggregated.name();
        if !is_valid_name(name) {
            return Err(TofukitError::validation(
                format!("project '{}'", name),
                "name cannot be used as a file name",
            ));
        }

        let content = self.format.renderer().render(aggregated)?;

        fs::create_dir_all(&self.output_dir)?;

        let file_name = self.file_name(name);
        let path = self.output_dir.join(&file_name);
        let temp_path = self.output_dir.join(format!(".{}.tmp", file_name));

        debug!("Writing {} bytes to {}", content.len(), temp_path.display());
        if let Err(e) = replace_via_temp(&temp_path, &path, &content) {
            // Only a regular file can be ours to clean up
            if temp_path.is_file() {
                let _ = fs::remove_file(&temp_path);
            }
            return Err(e.into());
        }

        info!(
            "Wrote {} context for project '{}' to {}",
            self.format,
            aggregated.name(),
            path.display()
        );
        Ok(path)
    }
}

/// Write `content` to `temp_path`, then rename it over `path`.
fn replace_via_temp(temp_path: &Path, path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(temp_path, content)?;
    fs::rename(temp_path, path)
}
