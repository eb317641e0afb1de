//! Output encodings.

use std::fmt;
use std::str::FromStr;

use crate::error::TofukitError;

use super::render::{ContextRenderer, JsonRenderer, MarkdownRenderer, YamlRenderer};

/// Encoding of a written project context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON (the structured default).
    #[default]
    Json,
    /// YAML with the same structure as the JSON document.
    Yaml,
    /// Human-oriented Markdown summary.
    Markdown,
}

impl OutputFormat {
    /// Canonical name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Markdown => "markdown",
        }
    }

    /// File extension used for documents in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Markdown => "md",
        }
    }

    /// The renderer producing this format.
    pub fn renderer(&self) -> Box<dyn ContextRenderer> {
        match self {
            Self::Json => Box::new(JsonRenderer),
            Self::Yaml => Box::new(YamlRenderer),
            Self::Markdown => Box::new(MarkdownRenderer),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = TofukitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" | "structured-json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(TofukitError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("structured-json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn unsupported_format_is_an_error() {
        let err = "toml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, TofukitError::UnsupportedFormat { format } if format == "toml"));
    }

    #[test]
    fn empty_format_is_an_error() {
        assert!("".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn extensions() {
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Yaml.extension(), "yaml");
        assert_eq!(OutputFormat::Markdown.extension(), "md");
    }

    #[test]
    fn default_is_json() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn renderer_matches_format() {
        for format in [OutputFormat::Json, OutputFormat::Yaml, OutputFormat::Markdown] {
            assert_eq!(format.renderer().format(), format);
        }
    }
}
