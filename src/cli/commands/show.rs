//! Show command implementation.
//!
//! The `tofukit show <project>` command prints one project's rendered
//! document to stdout.

use std::path::{Path, PathBuf};

use crate::cli::args::{ManifestArgs, ShowArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The show command implementation.
pub struct ShowCommand {
    project_root: PathBuf,
    manifest: ManifestArgs,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(project_root: &Path, manifest: ManifestArgs, args: ShowArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            manifest,
            args,
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::open(&self.project_root, &self.manifest, ui)?;

        let Some(value) = workspace.project(&self.args.name) else {
            ui.error(&format!(
                "Project '{}' is not declared in the manifest",
                self.args.name
            ));
            return Ok(CommandResult::failure(1));
        };

        let aggregated = workspace.session.plan_project(value)?;
        let rendered = workspace.format.renderer().render(&aggregated)?;
        ui.document(&rendered);

        Ok(CommandResult::from_failures(workspace.kit_failures))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn manifest(dir: &Path) {
        fs::write(
            dir.join("tofukit.yml"),
            r#"
projects:
  - name: demo
    version: "1"
    kits:
      x: {type: tool, name: uv, version: "0.4"}
"#,
        )
        .unwrap();
    }

    #[test]
    fn show_prints_rendered_document() {
        let temp = TempDir::new().unwrap();
        manifest(temp.path());
        let mut ui = MockUI::new();
        let args = ShowArgs {
            name: "demo".to_string(),
        };

        let result = ShowCommand::new(temp.path(), ManifestArgs::default(), args)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&ui.documents()[0]).unwrap();
        assert_eq!(value["project"]["dependencies"], serde_json::json!(["@kit.x"]));
        assert!(!temp.path().join(".tofukit").exists());
    }

    #[test]
    fn show_unknown_project_fails() {
        let temp = TempDir::new().unwrap();
        manifest(temp.path());
        let mut ui = MockUI::new();
        let args = ShowArgs {
            name: "other".to_string(),
        };

        let result = ShowCommand::new(temp.path(), ManifestArgs::default(), args)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("'other'"));
    }
}
