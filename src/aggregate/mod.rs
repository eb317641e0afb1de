//! Project aggregation.
//!
//! The [`Aggregator`] turns a [`Project`] into an [`AggregatedProject`]:
//!
//! - **Explicit mode**: the project carries its own key→kit map. Keys are
//!   checked and used as-is, in key order.
//! - **Closure mode**: the project lists direct references. Each is resolved
//!   against the registry, and each resolved kit's own references are
//!   followed until the closure is complete (see [`closure`]).
//!
//! Either way the result lists kits in first-discovery order, which is also
//! the order of the `@kit.<key>` dependency entries.
//!
//! # Example
//!
//! ```
//! use tofukit::aggregate::Aggregator;
//! use tofukit::catalog::{Kit, KitKind, KitRef, Project};
//! use tofukit::registry::KitRegistry;
//!
//! let registry = KitRegistry::new();
//! registry.store(
//!     Kit::new(KitKind::Language, "python", "3.12")
//!         .depending_on(KitRef::new(KitKind::Tool, "uv")),
//! );
//! registry.store(Kit::new(KitKind::Tool, "uv", "0.4"));
//!
//! let project = Project::new("demo", "1.0.0")
//!     .depending_on(KitRef::new(KitKind::Language, "python"));
//!
//! let aggregated = Aggregator::new(&registry).aggregate(&project).unwrap();
//! assert_eq!(
//!     aggregated.dependencies(),
//!     vec!["@kit.language.python", "@kit.tool.uv"]
//! );
//! ```

pub mod closure;
pub mod merge;
pub mod resolved;

pub use merge::{merge_requirements, MergedRequirement, RequirementSource};
pub use resolved::{AggregatedProject, ResolutionMode, ResolvedKit};

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::{is_valid_name, Kit, Project};
use crate::error::{Result, TofukitError};
use crate::registry::KitRegistry;

/// Resolves projects against a kit registry.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    registry: &'a KitRegistry,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator reading from `registry`.
    pub fn new(registry: &'a KitRegistry) -> Self {
        Self { registry }
    }

    /// Resolve the project's kits and compute its dependencies.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an invalid explicit key, `NotFound` for an
    /// unresolvable reference and `DependencyCycle` when closure traversal
    /// re-enters a kit on the current path.
    pub fn aggregate(&self, project: &Project) -> Result<AggregatedProject> {
        let (mode, kits) = match &project.kits {
            Some(map) => (ResolutionMode::Explicit, resolve_explicit(project, map)?),
            None => {
                let view = self.registry.view();
                (ResolutionMode::Closure, closure::resolve_closure(&view, project)?)
            }
        };

        debug!(
            "Aggregated {} ({:?} mode): {} kits",
            project.id,
            mode,
            kits.len()
        );

        Ok(AggregatedProject {
            project: project.clone(),
            mode,
            kits,
        })
    }
}

fn resolve_explicit(project: &Project, kits: &BTreeMap<String, Kit>) -> Result<Vec<ResolvedKit>> {
    kits.iter()
        .map(|(key, kit)| {
            if !is_valid_name(key) {
                return Err(TofukitError::validation(
                    format!("project '{}'", project.name),
                    format!("invalid kit key '{}'", key),
                ));
            }
            Ok(ResolvedKit::new(key.clone(), kit.clone()))
        })
        .collect()
}
