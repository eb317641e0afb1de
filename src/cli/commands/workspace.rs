//! Manifest loading shared by every command.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::cli::args::ManifestArgs;
use crate::config::{load_manifest_from, Settings};
use crate::context::OutputFormat;
use crate::error::Result;
use crate::session::Session;
use crate::ui::UserInterface;

/// A session with every manifest kit declared, plus the undecoded projects.
pub struct Workspace {
    pub session: Session,
    pub format: OutputFormat,
    pub projects: Vec<Value>,
    /// Kits that failed to decode or register
    pub kit_failures: usize,
}

impl Workspace {
    /// Load the manifest, resolve settings and declare its kits.
    ///
    /// Kit errors are reported through `ui` and counted; they do not stop
    /// the remaining kits. Manifest and format errors are returned.
    pub fn open(
        project_root: &Path,
        args: &ManifestArgs,
        ui: &mut dyn UserInterface,
    ) -> Result<Self> {
        let file = args.file.as_ref().map(|f| project_root.join(f));
        let manifest = load_manifest_from(project_root, file.as_deref())?;

        let settings = resolve_settings(project_root, manifest.settings, args);
        let format = settings.output_format.parse::<OutputFormat>()?;
        debug!(
            "Output: {} documents in {}",
            format,
            settings.output_path.display()
        );

        let session = Session::new(settings);
        let mut kit_failures = 0;
        for value in &manifest.kits {
            if let Err(e) = session.create_kit(value) {
                ui.error(&e.to_string());
                kit_failures += 1;
            }
        }

        Ok(Self {
            session,
            format,
            projects: manifest.projects,
            kit_failures,
        })
    }

    /// Find a project value by name.
    pub fn project(&self, name: &str) -> Option<&Value> {
        self.projects
            .iter()
            .find(|value| project_name(value) == Some(name))
    }
}

/// Name of an undecoded project, for messages.
pub fn project_name(value: &Value) -> Option<&str> {
    value.get("name").and_then(Value::as_str)
}

/// Apply flag and environment overrides; relative output paths are taken
/// from the project root.
fn resolve_settings(project_root: &Path, settings: Settings, args: &ManifestArgs) -> Settings {
    let mut settings = settings.with_overrides(args.format.as_deref(), args.output.clone());
    if settings.output_path.is_relative() {
        settings.output_path = project_root.join(&settings.output_path);
    }
    settings
}
