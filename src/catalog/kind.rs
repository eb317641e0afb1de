//! Kit kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The technology category a kit belongs to.
///
/// Serialized in lowercase, and used as the first segment of a kit ID
/// (`language.python`, `tool.uv`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KitKind {
    Language,
    Framework,
    Tool,
    Methodology,
    Style,
    Infrastructure,
    Integration,
    /// Groups other kits through its references; usually has no requirements.
    Blueprint,
}

impl KitKind {
    /// Every kind, in declaration order.
    pub const ALL: [KitKind; 8] = [
        KitKind::Language,
        KitKind::Framework,
        KitKind::Tool,
        KitKind::Methodology,
        KitKind::Style,
        KitKind::Infrastructure,
        KitKind::Integration,
        KitKind::Blueprint,
    ];

    /// The wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Framework => "framework",
            Self::Tool => "tool",
            Self::Methodology => "methodology",
            Self::Style => "style",
            Self::Infrastructure => "infrastructure",
            Self::Integration => "integration",
            Self::Blueprint => "blueprint",
        }
    }
}

impl fmt::Display for KitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KitKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown kit kind: {}", s))
    }
}
