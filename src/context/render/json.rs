//! JSON renderer.

use super::ContextRenderer;
use crate::aggregate::AggregatedProject;
use crate::context::document::ContextDocument;
use crate::context::format::OutputFormat;
use crate::error::{Result, TofukitError};

/// Renders the context document as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ContextRenderer for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, aggregated: &AggregatedProject) -> Result<String> {
        let document = ContextDocument::from(aggregated);
        let mut json =
            serde_json::to_string_pretty(&document).map_err(|e| TofukitError::Serialization {
                format: "json".to_string(),
                message: e.to_string(),
            })?;
        json.push('\n');
        Ok(json)
    }
}
