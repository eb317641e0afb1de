//! Canonical kit, requirement and project types.
//!
//! These types serialize to the same shape they decode from, so a decoded
//! value can always be re-encoded and decoded again without change. Decoding
//! goes through the strict wire structs in [`super::decode`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::kind::KitKind;
use super::reference::{kit_id, KitRef};

/// A command confirming that a requirement was satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Verification {
    /// Command to run
    pub command: String,

    /// Expected output or pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<String>,
}

impl Verification {
    /// Create a verification without an expected pattern.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            expect: None,
        }
    }

    /// Set the expected output pattern.
    pub fn expecting(mut self, expect: impl Into<String>) -> Self {
        self.expect = Some(expect.into());
        self
    }
}

/// A named unit of setup instructions.
///
/// `priority` distinguishes "unset" (`None`, omitted when encoded) from an
/// explicit value. Ordering always uses [`Requirement::effective_priority`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Requirement {
    /// Requirement name
    pub name: String,

    /// Higher sorts first when requirements from several sources are merged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,

    /// Ordered instructions
    #[serde(default)]
    pub instructions: Vec<String>,

    /// Optional verification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
}

impl Requirement {
    /// Create a requirement with no instructions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: None,
            instructions: Vec::new(),
            verification: None,
        }
    }

    /// Set an explicit priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Append an instruction.
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instructions.push(instruction.into());
        self
    }

    /// Attach a verification.
    pub fn with_verification(mut self, verification: Verification) -> Self {
        self.verification = Some(verification);
        self
    }

    /// Priority used for ordering; unset counts as 0.
    pub fn effective_priority(&self) -> i64 {
        self.priority.unwrap_or(0)
    }
}

/// A typed, versioned technology unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "super::decode::KitSpec")]
pub struct Kit {
    /// `<kind>.<name>`, assigned on creation
    pub id: String,

    #[serde(rename = "type")]
    pub kind: KitKind,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub version: String,

    /// Kits this kit pulls into a project's closure
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<KitRef>,

    pub requirements: Vec<Requirement>,
}

impl Kit {
    /// Create a kit with its ID derived from kind and name.
    pub fn new(kind: KitKind, name: impl Into<String>, version: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: kit_id(kind, &name),
            kind,
            name,
            description: None,
            version: version.into(),
            depends_on: Vec::new(),
            requirements: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a reference to another kit.
    pub fn depending_on(mut self, reference: KitRef) -> Self {
        self.depends_on.push(reference);
        self
    }

    /// Append a requirement.
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// A reference pointing at this kit.
    pub fn reference(&self) -> KitRef {
        KitRef::new(self.kind, self.name.clone())
    }
}

/// The root aggregation unit.
///
/// A project either carries an explicit `kits` map or a list of direct
/// references resolved through the registry, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "super::decode::ProjectSpec")]
pub struct Project {
    /// `project.<name>`
    pub id: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub version: String,

    /// The project's own requirements
    pub requirements: Vec<Requirement>,

    /// Direct kit references, resolved transitively
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<KitRef>,

    /// Caller-supplied, already resolved kits keyed by the caller's key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kits: Option<BTreeMap<String, Kit>>,
}

impl Project {
    /// Create a project with no kits or requirements.
    ///
    /// The name is not checked here; decoding and
    /// [`ContextWriter::write`](crate::context::ContextWriter::write) reject
    /// names that cannot become file names.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: project_id(&name),
            name,
            description: None,
            version: version.into(),
            requirements: Vec::new(),
            depends_on: Vec::new(),
            kits: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append one of the project's own requirements.
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Add a direct kit reference.
    pub fn depending_on(mut self, reference: KitRef) -> Self {
        self.depends_on.push(reference);
        self
    }

    /// Add a kit to the explicit map, switching the project to explicit mode.
    pub fn with_kit(mut self, key: impl Into<String>, kit: Kit) -> Self {
        self.kits
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), kit);
        self
    }
}

/// Build the identifier of a project from its name.
pub fn project_id(name: &str) -> String {
    format!("project.{}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kit_id_is_derived_from_kind_and_name() {
        let kit = Kit::new(KitKind::Language, "python", "3.12");
        assert_eq!(kit.id, "language.python");
        assert_eq!(kit.reference().to_string(), "@language.python");
    }

    #[test]
    fn effective_priority_defaults_to_zero() {
        assert_eq!(Requirement::new("a").effective_priority(), 0);
        assert_eq!(Requirement::new("a").with_priority(5).effective_priority(), 5);
    }

    #[test]
    fn requirement_without_verification_has_no_key() {
        let req = Requirement::new("install").with_instruction("pip install");
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("verification").is_none());
        assert!(value.get("priority").is_none());
        assert_eq!(value["instructions"][0], "pip install");
    }

    #[test]
    fn requirement_without_instructions_serializes_empty_list() {
        let value = serde_json::to_value(Requirement::new("empty")).unwrap();
        assert_eq!(value["instructions"], serde_json::json!([]));
    }

    #[test]
    fn verification_omits_missing_expect() {
        let value = serde_json::to_value(Verification::new("ruff --version")).unwrap();
        assert_eq!(value, serde_json::json!({"command": "ruff --version"}));
    }

    #[test]
    fn kit_serializes_kind_as_type() {
        let value = serde_json::to_value(Kit::new(KitKind::Tool, "uv", "0.4")).unwrap();
        assert_eq!(value["type"], "tool");
        assert!(value.get("kind").is_none());
        assert!(value.get("depends_on").is_none());
    }

    #[test]
    fn with_kit_switches_project_to_explicit_map() {
        let project = Project::new("demo", "1.0.0").with_kit("py", Kit::new(KitKind::Language, "python", "3"));
        assert_eq!(project.id, "project.demo");
        assert_eq!(project.kits.as_ref().map(|k| k.len()), Some(1));
    }
}
