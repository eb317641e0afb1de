//! Aggregation results.

use crate::catalog::{Kit, Project};

use super::merge::{merge_requirements, MergedRequirement};

/// How a project's kits were resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    /// The project supplied a key→kit map.
    Explicit,
    /// Kits were reached through the registry from direct references.
    Closure,
}

/// A kit together with the key it is published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKit {
    pub key: String,
    pub kit: Kit,
}

impl ResolvedKit {
    pub fn new(key: impl Into<String>, kit: Kit) -> Self {
        Self {
            key: key.into(),
            kit,
        }
    }

    /// The dependency entry for this kit (`@kit.<key>`).
    pub fn dependency(&self) -> String {
        format!("@kit.{}", self.key)
    }
}

/// A project with its kits resolved, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedProject {
    pub project: Project,
    pub mode: ResolutionMode,
    /// Resolved kits in first-discovery order
    pub kits: Vec<ResolvedKit>,
}

impl AggregatedProject {
    /// The project's name.
    pub fn name(&self) -> &str {
        &self.project.name
    }

    /// Dependency entries in first-discovery order.
    pub fn dependencies(&self) -> Vec<String> {
        self.kits.iter().map(ResolvedKit::dependency).collect()
    }

    /// Look up a resolved kit by key.
    pub fn kit(&self, key: &str) -> Option<&Kit> {
        self.kits.iter().find(|k| k.key == key).map(|k| &k.kit)
    }

    /// Every requirement of the project and its kits, highest priority first.
    pub fn merged_requirements(&self) -> Vec<MergedRequirement<'_>> {
        merge_requirements(&self.project.requirements, &self.kits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KitKind;

    #[test]
    fn dependency_uses_kit_prefix() {
        let resolved = ResolvedKit::new("x", Kit::new(KitKind::Tool, "uv", "1"));
        assert_eq!(resolved.dependency(), "@kit.x");
    }

    #[test]
    fn dependencies_follow_kit_order() {
        let aggregated = AggregatedProject {
            project: Project::new("p", "1"),
            mode: ResolutionMode::Closure,
            kits: vec![
                ResolvedKit::new("tool.b", Kit::new(KitKind::Tool, "b", "1")),
                ResolvedKit::new("tool.a", Kit::new(KitKind::Tool, "a", "1")),
            ],
        };

        assert_eq!(aggregated.dependencies(), vec!["@kit.tool.b", "@kit.tool.a"]);
        assert_eq!(aggregated.kit("tool.a").unwrap().name, "a");
        assert!(aggregated.kit("tool.c").is_none());
    }
}
