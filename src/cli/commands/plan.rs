//! Plan command implementation.
//!
//! The `tofukit plan` command resolves every project and lists what each
//! would depend on, without writing anything.

use std::path::{Path, PathBuf};

use crate::aggregate::ResolutionMode;
use crate::cli::args::ManifestArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The plan command implementation.
pub struct PlanCommand {
    project_root: PathBuf,
    args: ManifestArgs,
}

impl PlanCommand {
    /// Create a new plan command.
    pub fn new(project_root: &Path, args: ManifestArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for PlanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::open(&self.project_root, &self.args, ui)?;
        let mut failures = workspace.kit_failures;

        for value in &workspace.projects {
            let aggregated = match workspace.session.plan_project(value) {
                Ok(aggregated) => aggregated,
                Err(e) => {
                    ui.error(&e.to_string());
                    failures += 1;
                    continue;
                }
            };

            let mode = match aggregated.mode {
                ResolutionMode::Explicit => "explicit",
                ResolutionMode::Closure => "closure",
            };
            ui.show_header(&format!("{} ({} kits)", aggregated.name(), mode));
            for dependency in aggregated.dependencies() {
                ui.message(&format!("  {}", dependency));
            }
            ui.message(&format!(
                "  {} requirements",
                aggregated.merged_requirements().len()
            ));
        }

        Ok(CommandResult::from_failures(failures))
    }
}
