//! YAML renderer.

use super::ContextRenderer;
use crate::aggregate::AggregatedProject;
use crate::context::document::ContextDocument;
use crate::context::format::OutputFormat;
use crate::error::{Result, TofukitError};

/// Renders the context document as YAML.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlRenderer;

impl ContextRenderer for YamlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Yaml
    }

    fn render(&self, aggregated: &AggregatedProject) -> Result<String> {
        let document = ContextDocument::from(aggregated);
        serde_yaml::to_string(&document).map_err(|e| TofukitError::Serialization {
            format: "yaml".to_string(),
            message: e.to_string(),
        })
    }
}
