//! Apply command implementation.
//!
//! The `tofukit apply` command declares every kit in the manifest, then
//! computes and writes every project's document.

use std::path::{Path, PathBuf};

use crate::cli::args::ManifestArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::{project_name, Workspace};

/// The apply command implementation.
pub struct ApplyCommand {
    project_root: PathBuf,
    args: ManifestArgs,
}

impl ApplyCommand {
    /// Create a new apply command.
    pub fn new(project_root: &Path, args: ManifestArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for ApplyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::open(&self.project_root, &self.args, ui)?;
        let mut failures = workspace.kit_failures;
        let mut written = 0;

        ui.show_header(&format!(
            "Applying {} kits, {} projects",
            workspace.session.registry().len(),
            workspace.projects.len()
        ));

        for value in &workspace.projects {
            let name = project_name(value).unwrap_or("<unnamed>");
            match workspace.session.create_project(value) {
                Ok(outcome) => match outcome.path() {
                    Some(path) => {
                        ui.success(&format!("{} -> {}", name, path.display()));
                        written += 1;
                    }
                    None => {
                        ui.warning(&format!(
                            "Project '{}' was resolved but not written: {}",
                            name,
                            outcome.write_error.as_deref().unwrap_or("unknown error")
                        ));
                        failures += 1;
                    }
                },
                Err(e) => {
                    ui.error(&e.to_string());
                    failures += 1;
                }
            }
        }

        ui.message("");
        ui.message(&format!("{} written, {} failed", written, failures));

        Ok(CommandResult::from_failures(failures))
    }
}
