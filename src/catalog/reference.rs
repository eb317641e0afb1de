//! Kit references and name rules.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::kind::KitKind;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap());

/// Prefix carried by resource-style references (`@tofukit_language.python`).
const RESOURCE_PREFIX: &str = "tofukit_";

/// Check whether `name` can be used in a kit or project identifier.
///
/// Names end up in IDs and in output file names, so path separators,
/// whitespace and leading dots are rejected.
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Build the identifier of a kit from its kind and name.
pub fn kit_id(kind: KitKind, name: &str) -> String {
    format!("{}.{}", kind, name)
}

/// A reference from a project or kit to another kit.
///
/// Format: `@<kind>.<name>`. The leading `@` is optional when parsing and
/// always present when displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KitRef {
    kind: KitKind,
    name: String,
}

impl KitRef {
    /// Create a reference to the kit with the given kind and name.
    pub fn new(kind: KitKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Parse a reference such as `@language.python` or `tool.uv`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix('@').unwrap_or(trimmed);
        let (kind, name) = body
            .split_once('.')
            .ok_or_else(|| format!("reference '{}' must look like @<kind>.<name>", s))?;

        let kind = kind.strip_prefix(RESOURCE_PREFIX).unwrap_or(kind);
        let kind: KitKind = kind
            .parse()
            .map_err(|e| format!("reference '{}': {}", s, e))?;

        if !is_valid_name(name) {
            return Err(format!("reference '{}' has an invalid kit name", s));
        }

        Ok(Self::new(kind, name))
    }

    /// The referenced kit's kind.
    pub fn kind(&self) -> KitKind {
        self.kind
    }

    /// The referenced kit's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The identifier of the referenced kit.
    pub fn id(&self) -> String {
        kit_id(self.kind, &self.name)
    }
}

impl fmt::Display for KitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}.{}", self.kind, self.name)
    }
}

impl Serialize for KitRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for KitRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        KitRef::parse(&s).map_err(serde::de::Error::custom)
    }
}
