//! Document renderers.
//!
//! Each output format has a renderer implementing [`ContextRenderer`]. The
//! structured renderers encode a [`ContextDocument`](super::ContextDocument);
//! the Markdown renderer also lists the merged, priority-ordered requirements.

pub mod json;
pub mod markdown;
pub mod yaml;

use crate::aggregate::AggregatedProject;
use crate::error::Result;

use super::format::OutputFormat;

/// Trait for rendering an aggregated project.
pub trait ContextRenderer {
    /// The format this renderer produces.
    fn format(&self) -> OutputFormat;

    /// Render the full document in memory.
    fn render(&self, aggregated: &AggregatedProject) -> Result<String>;
}

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use yaml::YamlRenderer;
