//! Result of a project create or update.

use std::path::{Path, PathBuf};

use crate::aggregate::AggregatedProject;

/// What happened when a project was (re)computed.
///
/// Aggregation always succeeded if an outcome exists. Writing may still have
/// failed: in that case `written` is `None` and `write_error` holds the
/// reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOutcome {
    pub aggregated: AggregatedProject,
    pub written: Option<PathBuf>,
    pub write_error: Option<String>,
}

impl ProjectOutcome {
    pub(crate) fn written(aggregated: AggregatedProject, path: PathBuf) -> Self {
        Self {
            aggregated,
            written: Some(path),
            write_error: None,
        }
    }

    pub(crate) fn failed(aggregated: AggregatedProject, error: String) -> Self {
        Self {
            aggregated,
            written: None,
            write_error: Some(error),
        }
    }

    /// Path of the written document, if the write succeeded.
    pub fn path(&self) -> Option<&Path> {
        self.written.as_deref()
    }

    /// Whether the document reached disk.
    pub fn is_written(&self) -> bool {
        self.written.is_some()
    }
}
