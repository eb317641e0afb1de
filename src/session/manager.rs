//! The session: one registry, one writer configuration, many resources.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::outcome::ProjectOutcome;
use crate::aggregate::{AggregatedProject, Aggregator};
use crate::catalog::{decode_kit, decode_project, Kit};
use crate::config::Settings;
use crate::context::ContextWriter;
use crate::error::{Result, TofukitError};
use crate::registry::KitRegistry;

/// Owns the kit registry for one run and drives resource lifecycles.
///
/// Kits must be created before the projects that reference them in closure
/// mode. Nothing outlives the session except written documents.
#[derive(Debug, Default)]
pub struct Session {
    settings: Settings,
    registry: KitRegistry,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            registry: KitRegistry::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &KitRegistry {
        &self.registry
    }

    /// Decode and register a new kit.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the value is malformed or a kit with the same
    /// ID already exists.
    pub fn create_kit(&self, value: &Value) -> Result<Kit> {
        let kit = decode_kit(value)?;
        self.registry.insert_new(kit.clone()).map_err(|existing| {
            TofukitError::validation(
                format!("kit '{}'", existing.id),
                "a kit with this id is already declared",
            )
        })?;
        info!("Created kit {}", kit.id);
        Ok(kit)
    }

    /// Decode a new definition for an existing kit.
    ///
    /// The kit's ID cannot change. Projects already written are not touched.
    pub fn update_kit(&self, id: &str, value: &Value) -> Result<Kit> {
        let kit = decode_kit(value)?;
        if kit.id != id {
            return Err(TofukitError::validation(
                format!("kit '{}'", id),
                format!("id is immutable, got '{}'", kit.id),
            ));
        }
        self.registry
            .replace(kit.clone())
            .map_err(|_| TofukitError::NotFound {
                reference: format!("@{}", id),
                required_by: "update".to_string(),
            })?;
        info!("Updated kit {}", kit.id);
        Ok(kit)
    }

    pub fn read_kit(&self, id: &str) -> Option<Kit> {
        self.registry.fetch(id)
    }

    /// Remove a kit. Documents that already mention it are left as they are.
    pub fn delete_kit(&self, id: &str) -> Option<Kit> {
        let removed = self.registry.remove(id);
        if removed.is_some() {
            info!("Deleted kit {}", id);
        }
        removed
    }

    /// Decode and aggregate a project without writing anything.
    pub fn plan_project(&self, value: &Value) -> Result<AggregatedProject> {
        let project = decode_project(value)?;
        Aggregator::new(&self.registry).aggregate(&project)
    }

    /// Compute a project and write its document.
    ///
    /// Decoding, aggregation and format errors are returned and no file is
    /// touched. A failed write is logged and reported in the outcome.
    pub fn create_project(&self, value: &Value) -> Result<ProjectOutcome> {
        self.apply_project(value, "Created")
    }

    /// Recompute a project and rewrite its document.
    pub fn update_project(&self, value: &Value) -> Result<ProjectOutcome> {
        self.apply_project(value, "Updated")
    }

    /// Forget a project.
    ///
    /// The previously written document stays on disk; its path is returned
    /// when it exists.
    pub fn delete_project(&self, name: &str) -> Option<PathBuf> {
        let existing = ContextWriter::from_settings(&self.settings)
            .ok()
            .map(|writer| writer.path_for(name))
            .filter(|path| path.exists());

        match existing {
            Some(ref path) => warn!(
                "Project '{}' deleted; its document at {} was left in place",
                name,
                path.display()
            ),
            None => info!("Deleted project '{}'", name),
        }
        existing
    }

    fn apply_project(&self, value: &Value, verb: &str) -> Result<ProjectOutcome> {
        let aggregated = self.plan_project(value)?;
        let writer = ContextWriter::from_settings(&self.settings)?;
        debug!("{} project {}", verb, aggregated.project.id);

        match writer.write(&aggregated) {
            Ok(path) => Ok(ProjectOutcome::written(aggregated, path)),
            Err(TofukitError::Io(e)) => {
                error!(
                    "Failed to write document for project '{}': {}",
                    aggregated.name(),
                    e
                );
                Ok(ProjectOutcome::failed(aggregated, e.to_string()))
            }
            Err(other) => Err(other),
        }
    }
}
