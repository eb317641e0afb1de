//! Strict decoding of kits, requirements and projects.
//!
//! External input arrives as loosely-typed values (a YAML manifest, a JSON
//! document written by another tool). Decoding maps them onto the canonical
//! model and fails with [`TofukitError::Validation`] on any unknown field,
//! mismatched shape or invalid name. Nothing is silently dropped.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::kind::KitKind;
use super::model::{project_id, Kit, Project, Requirement};
use super::reference::{is_valid_name, kit_id, KitRef};
use crate::error::{Result, TofukitError};

/// Wire shape of a kit, accepting the legacy attribute aliases.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct KitSpec {
    #[serde(default)]
    id: Option<String>,

    #[serde(rename = "type", alias = "kind")]
    kind: KitKind,

    name: String,

    #[serde(default)]
    description: Option<String>,

    version: String,

    #[serde(default, alias = "depends_on_refs")]
    depends_on: Vec<KitRef>,

    #[serde(default, alias = "requirement")]
    requirements: Vec<Requirement>,
}

/// Wire shape of a project.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProjectSpec {
    #[serde(default)]
    id: Option<String>,

    name: String,

    #[serde(default)]
    description: Option<String>,

    version: String,

    #[serde(default, alias = "requirement")]
    requirements: Vec<Requirement>,

    #[serde(default, alias = "depends_on_refs")]
    depends_on: Vec<KitRef>,

    #[serde(default)]
    kits: Option<BTreeMap<String, Kit>>,
}

impl TryFrom<KitSpec> for Kit {
    type Error = String;

    fn try_from(spec: KitSpec) -> std::result::Result<Self, Self::Error> {
        check_name("kit", &spec.name)?;
        let id = kit_id(spec.kind, &spec.name);
        if let Some(given) = &spec.id {
            if *given != id {
                return Err(format!("id '{}' does not match '{}'", given, id));
            }
        }
        check_version(&spec.version)?;
        check_requirements(&spec.requirements)?;

        Ok(Kit {
            id,
            kind: spec.kind,
            name: spec.name,
            description: spec.description,
            version: spec.version,
            depends_on: spec.depends_on,
            requirements: spec.requirements,
        })
    }
}

impl TryFrom<ProjectSpec> for Project {
    type Error = String;

    fn try_from(spec: ProjectSpec) -> std::result::Result<Self, Self::Error> {
        check_name("project", &spec.name)?;
        let id = project_id(&spec.name);
        if let Some(given) = &spec.id {
            if *given != id {
                return Err(format!("id '{}' does not match '{}'", given, id));
            }
        }
        check_version(&spec.version)?;
        check_requirements(&spec.requirements)?;

        if spec.kits.is_some() && !spec.depends_on.is_empty() {
            return Err("`kits` and `depends_on` cannot be combined; \
                        declare kits explicitly or reference them, not both"
                .to_string());
        }

        Ok(Project {
            id,
            name: spec.name,
            description: spec.description,
            version: spec.version,
            requirements: spec.requirements,
            depends_on: spec.depends_on,
            kits: spec.kits,
        })
    }
}

fn check_name(what: &str, name: &str) -> std::result::Result<(), String> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(format!(
            "invalid {} name '{}' (letters, digits, '.', '_' and '-' only)",
            what, name
        ))
    }
}

fn check_version(version: &str) -> std::result::Result<(), String> {
    if version.trim().is_empty() {
        Err("version must not be empty".to_string())
    } else {
        Ok(())
    }
}

fn check_requirements(requirements: &[Requirement]) -> std::result::Result<(), String> {
    for (index, requirement) in requirements.iter().enumerate() {
        check_requirement(requirement).map_err(|e| format!("requirement #{}: {}", index + 1, e))?;
    }
    Ok(())
}

fn check_requirement(requirement: &Requirement) -> std::result::Result<(), String> {
    if requirement.name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if let Some(verification) = &requirement.verification {
        if verification.command.trim().is_empty() {
            return Err(format!(
                "'{}' has a verification with an empty command",
                requirement.name
            ));
        }
    }
    Ok(())
}

/// Human label for a raw resource, used in validation errors.
fn resource_label(value: &Value, what: &str) -> String {
    let name = value.get("name").and_then(Value::as_str);
    let kind = value
        .get("type")
        .or_else(|| value.get("kind"))
        .and_then(Value::as_str);

    match (kind, name) {
        (Some(kind), Some(name)) if what == "kit" => format!("kit '{}.{}'", kind, name),
        (_, Some(name)) => format!("{} '{}'", what, name),
        _ => what.to_string(),
    }
}

/// Decode a kit from a loosely-typed value.
pub fn decode_kit(value: &Value) -> Result<Kit> {
    Kit::deserialize(value)
        .map_err(|e| TofukitError::validation(resource_label(value, "kit"), e.to_string()))
}

/// Decode a project from a loosely-typed value.
pub fn decode_project(value: &Value) -> Result<Project> {
    Project::deserialize(value)
        .map_err(|e| TofukitError::validation(resource_label(value, "project"), e.to_string()))
}

/// Decode a single requirement block.
pub fn decode_requirement(value: &Value) -> Result<Requirement> {
    let label = resource_label(value, "requirement");
    let requirement = Requirement::deserialize(value)
        .map_err(|e| TofukitError::validation(label.clone(), e.to_string()))?;
    check_requirement(&requirement).map_err(|e| TofukitError::validation(label, e))?;
    Ok(requirement)
}

/// Encode a kit into the value shape [`decode_kit`] accepts.
pub fn encode_kit(kit: &Kit) -> Result<Value> {
    serde_json::to_value(kit).map_err(|e| TofukitError::Serialization {
        format: "json".to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::Verification;
    use serde_json::json;

    fn python_kit() -> Kit {
        Kit::new(KitKind::Language, "python", "3.12")
            .with_description("CPython runtime")
            .depending_on(KitRef::new(KitKind::Tool, "uv"))
            .with_requirement(
                Requirement::new("install")
                    .with_priority(10)
                    .with_instruction("uv python install 3.12")
                    .with_verification(Verification::new("python --version").expecting("3.12")),
            )
            .with_requirement(Requirement::new("lint").with_instruction("ruff check ."))
    }

    #[test]
    fn kit_round_trips_exactly() {
        let kit = python_kit();
        let encoded = encode_kit(&kit).unwrap();
        assert_eq!(decode_kit(&encoded).unwrap(), kit);
    }

    #[test]
    fn minimal_kit_round_trips_exactly() {
        let kit = Kit::new(KitKind::Blueprint, "web", "1");
        let encoded = encode_kit(&kit).unwrap();
        assert_eq!(decode_kit(&encoded).unwrap(), kit);
    }

    #[test]
    fn decodes_with_defaults() {
        let kit = decode_kit(&json!({
            "type": "tool",
            "name": "ruff",
            "version": "0.6",
            "requirements": [{"name": "install"}]
        }))
        .unwrap();

        assert_eq!(kit.id, "tool.ruff");
        assert_eq!(kit.description, None);
        assert!(kit.depends_on.is_empty());
        let req = &kit.requirements[0];
        assert_eq!(req.priority, None);
        assert!(req.instructions.is_empty());
        assert!(req.verification.is_none());
    }

    #[test]
    fn accepts_original_attribute_aliases() {
        let kit = decode_kit(&json!({
            "kind": "framework",
            "name": "django",
            "version": "5.0",
            "depends_on_refs": ["@tofukit_language.python"],
            "requirement": [{"name": "install", "instructions": ["pip install django"]}]
        }))
        .unwrap();

        assert_eq!(kit.id, "framework.django");
        assert_eq!(kit.depends_on[0].id(), "language.python");
        assert_eq!(kit.requirements.len(), 1);
    }

    #[test]
    fn unknown_field_is_a_validation_error() {
        let err = decode_kit(&json!({
            "type": "tool",
            "name": "uv",
            "version": "0.4",
            "colour": "blue"
        }))
        .unwrap_err();

        match err {
            TofukitError::Validation { resource, message } => {
                assert_eq!(resource, "kit 'tool.uv'");
                assert!(message.contains("colour"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_requirement_field_is_a_validation_error() {
        let err = decode_kit(&json!({
            "type": "tool",
            "name": "uv",
            "version": "0.4",
            "requirements": [{"name": "install", "steps": ["x"]}]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("steps"));
    }

    #[test]
    fn mismatched_shape_is_a_validation_error() {
        let err = decode_kit(&json!({
            "type": "tool",
            "name": "uv",
            "version": "0.4",
            "requirements": [{"name": "install", "priority": "high"}]
        }))
        .unwrap_err();
        assert!(matches!(err, TofukitError::Validation { .. }));

        let err = decode_kit(&json!({
            "type": "tool",
            "name": "uv",
            "version": "0.4",
            "requirements": [{"name": "install", "instructions": "uv sync"}]
        }))
        .unwrap_err();
        assert!(matches!(err, TofukitError::Validation { .. }));
    }

    #[test]
    fn unknown_kind_is_a_validation_error() {
        let err = decode_kit(&json!({"type": "stack", "name": "web", "version": "1"})).unwrap_err();
        assert!(err.to_string().contains("stack"));
    }

    #[test]
    fn mismatched_id_is_rejected() {
        let err = decode_kit(&json!({
            "id": "tool.pip",
            "type": "tool",
            "name": "uv",
            "version": "0.4"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn invalid_name_is_rejected() {
        let err = decode_kit(&json!({"type": "tool", "name": "../uv", "version": "0.4"})).unwrap_err();
        assert!(err.to_string().contains("invalid kit name"));
    }

    #[test]
    fn empty_version_is_rejected() {
        assert!(decode_kit(&json!({"type": "tool", "name": "uv", "version": " "})).is_err());
    }

    #[test]
    fn empty_verification_command_is_rejected() {
        let err = decode_requirement(&json!({
            "name": "check",
            "verification": {"command": ""}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("empty command"));
    }

    #[test]
    fn unset_priority_stays_unset() {
        let req = decode_requirement(&json!({"name": "a"})).unwrap();
        assert_eq!(req.priority, None);
        assert_eq!(req.effective_priority(), 0);
        let encoded = serde_json::to_value(&req).unwrap();
        assert!(encoded.get("priority").is_none());
    }

    #[test]
    fn explicit_zero_priority_stays_explicit() {
        let req = decode_requirement(&json!({"name": "a", "priority": 0})).unwrap();
        assert_eq!(req.priority, Some(0));
        assert_eq!(req.effective_priority(), 0);
        let encoded = serde_json::to_value(&req).unwrap();
        assert_eq!(encoded["priority"], 0);
    }

    #[test]
    fn project_decodes_closure_references() {
        let project = decode_project(&json!({
            "name": "demo",
            "version": "1.0.0",
            "depends_on": ["@language.python", "@tool.ruff"]
        }))
        .unwrap();

        assert_eq!(project.id, "project.demo");
        assert_eq!(project.depends_on.len(), 2);
        assert!(project.kits.is_none());
    }

    #[test]
    fn project_decodes_explicit_kits() {
        let project = decode_project(&json!({
            "name": "demo",
            "version": "1.0.0",
            "kits": {
                "python": {"id": "language.python", "type": "language", "name": "python", "version": "3.12", "requirements": []}
            }
        }))
        .unwrap();

        let kits = project.kits.unwrap();
        assert_eq!(kits["python"].id, "language.python");
    }

    #[test]
    fn project_rejects_mixed_modes() {
        let err = decode_project(&json!({
            "name": "demo",
            "version": "1.0.0",
            "depends_on": ["@tool.ruff"],
            "kits": {}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("cannot be combined"));
    }

    #[test]
    fn project_round_trips_exactly() {
        let project = Project::new("demo", "1.0.0")
            .with_description("Demo app")
            .with_requirement(Requirement::new("readme").with_priority(0))
            .depending_on(KitRef::new(KitKind::Language, "python"));
        let encoded = serde_json::to_value(&project).unwrap();
        assert_eq!(decode_project(&encoded).unwrap(), project);
    }

    #[test]
    fn project_label_uses_name() {
        let err = decode_project(&json!({"name": "demo"})).unwrap_err();
        match err {
            TofukitError::Validation { resource, message } => {
                assert_eq!(resource, "project 'demo'");
                assert!(message.contains("version"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
