//! The serialized project context document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::aggregate::AggregatedProject;
use crate::catalog::{Kit, KitKind, Requirement};

/// Root of a project context document.
///
/// Field order is the key order in every structured encoding, and kits are
/// keyed in a sorted map, so rewriting an unchanged project produces the
/// same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDocument {
    pub project: ProjectSection,
    pub requirements: Vec<Requirement>,
    pub kits: BTreeMap<String, KitEntry>,
}

/// Project metadata and its resolved dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    pub description: String,
    pub version: String,
    /// `@kit.<key>` entries in first-discovery order
    pub dependencies: Vec<String>,
}

/// One kit as published in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: KitKind,
    pub name: String,
    pub description: String,
    pub version: String,
    pub requirements: Vec<Requirement>,
}

impl From<&Kit> for KitEntry {
    fn from(kit: &Kit) -> Self {
        Self {
            id: kit.id.clone(),
            kind: kit.kind,
            name: kit.name.clone(),
            description: kit.description.clone().unwrap_or_default(),
            version: kit.version.clone(),
            requirements: kit.requirements.clone(),
        }
    }
}

impl From<&AggregatedProject> for ContextDocument {
    fn from(aggregated: &AggregatedProject) -> Self {
        let project = &aggregated.project;
        Self {
            project: ProjectSection {
                name: project.name.clone(),
                description: project.description.clone().unwrap_or_default(),
                version: project.version.clone(),
                dependencies: aggregated.dependencies(),
            },
            requirements: project.requirements.clone(),
            kits: aggregated
                .kits
                .iter()
                .map(|resolved| (resolved.key.clone(), KitEntry::from(&resolved.kit)))
                .collect(),
        }
    }
}
