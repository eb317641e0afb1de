//! Markdown renderer.
//!
//! Produces a summary meant to be read by people: project metadata, the
//! resolved dependencies, a setup checklist of every requirement ordered by
//! priority, and one section per kit.

use std::fmt::{self, Write};

use super::ContextRenderer;
use crate::aggregate::{AggregatedProject, MergedRequirement};
use crate::catalog::Requirement;
use crate::context::format::OutputFormat;
use crate::error::{Result, TofukitError};

/// Renders an aggregated project as Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    fn write_document(&self, out: &mut String, aggregated: &AggregatedProject) -> fmt::Result {
        let project = &aggregated.project;

        writeln!(out, "# Project: {}", project.name)?;
        writeln!(out)?;
        if let Some(description) = project.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(out, "{}", description)?;
            writeln!(out)?;
        }
        writeln!(out, "- **Version:** {}", project.version)?;
        writeln!(out)?;

        writeln!(out, "## Dependencies")?;
        writeln!(out)?;
        if aggregated.kits.is_empty() {
            writeln!(out, "_None_")?;
        }
        for dependency in aggregated.dependencies() {
            writeln!(out, "- `{}`", dependency)?;
        }
        writeln!(out)?;

        writeln!(out, "## Setup checklist")?;
        writeln!(out)?;
        let merged = aggregated.merged_requirements();
        if merged.is_empty() {
            writeln!(out, "_No requirements_")?;
        }
        for entry in &merged {
            self.write_checklist_item(out, entry)?;
        }
        writeln!(out)?;

        writeln!(out, "## Kits")?;
        for resolved in &aggregated.kits {
            let kit = &resolved.kit;
            writeln!(out)?;
            writeln!(out, "### {} (`{}`)", resolved.key, kit.id)?;
            writeln!(out)?;
            if let Some(description) = kit.description.as_deref().filter(|d| !d.is_empty()) {
                writeln!(out, "{}", description)?;
                writeln!(out)?;
            }
            writeln!(out, "- **Type:** {}", kit.kind)?;
            writeln!(out, "- **Version:** {}", kit.version)?;
            if !kit.requirements.is_empty() {
                let names: Vec<&str> = kit.requirements.iter().map(|r| r.name.as_str()).collect();
                writeln!(out, "- **Requirements:** {}", names.join(", "))?;
            }
        }

        Ok(())
    }

    fn write_checklist_item(&self, out: &mut String, entry: &MergedRequirement<'_>) -> fmt::Result {
        let requirement: &Requirement = entry.requirement;
        writeln!(
            out,
            "- [ ] **{}** (priority {}, from {})",
            requirement.name,
            requirement.effective_priority(),
            entry.source
        )?;
        for instruction in &requirement.instructions {
            writeln!(out, "  - {}", instruction)?;
        }
        if let Some(ref verification) = requirement.verification {
            match verification.expect {
                Some(ref expect) => writeln!(
                    out,
                    "  - Verify: `{}` (expect `{}`)",
                    verification.command, expect
                )?,
                None => writeln!(out, "  - Verify: `{}`", verification.command)?,
            }
        }
        Ok(())
    }
}

impl ContextRenderer for MarkdownRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }

    fn render(&self, aggregated: &AggregatedProject) -> Result<String> {
        let mut out = String::new();
        self.write_document(&mut out, aggregated)
            .map_err(|e| TofukitError::Serialization {
                format: "markdown".to_string(),
                message: e.to_string(),
            })?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{ResolutionMode, ResolvedKit};
    use crate::catalog::{Kit, KitKind, Project, Verification};

    fn aggregated() -> AggregatedProject {
        AggregatedProject {
            project: Project::new("demo", "1.0.0")
                .with_description("A demo project")
                .with_requirement(Requirement::new("readme").with_priority(1)),
            mode: ResolutionMode::Closure,
            kits: vec![ResolvedKit::new(
                "tool.uv",
                Kit::new(KitKind::Tool, "uv", "0.4").with_requirement(
                    Requirement::new("install-uv")
                        .with_priority(10)
                        .with_instruction("pipx install uv")
                        .with_verification(Verification::new("uv --version")),
                ),
            )],
        }
    }

    #[test]
    fn renders_heading_and_dependencies() {
        let md = MarkdownRenderer.render(&aggregated()).unwrap();
        assert!(md.starts_with("# Project: demo\n"));
        assert!(md.contains("A demo project"));
        assert!(md.contains("- `@kit.tool.uv`"));
    }

    #[test]
    fn checklist_is_priority_ordered() {
        let md = MarkdownRenderer.render(&aggregated()).unwrap();
        let install = md.find("**install-uv**").unwrap();
        let readme = md.find("**readme**").unwrap();
        assert!(install < readme);
        assert!(md.contains("(priority 10, from tool.uv)"));
        assert!(md.contains("(priority 1, from project)"));
        assert!(md.contains("  - Verify: `uv --version`"));
    }

    #[test]
    fn renders_kit_sections() {
        let md = MarkdownRenderer.render(&aggregated()).unwrap();
        assert!(md.contains("### tool.uv (`tool.uv`)"));
        assert!(md.contains("- **Type:** tool"));
    }

    #[test]
    fn empty_project_renders_placeholders() {
        let aggregated = AggregatedProject {
            project: Project::new("bare", "0.1.0"),
            mode: ResolutionMode::Explicit,
            kits: Vec::new(),
        };
        let md = MarkdownRenderer.render(&aggregated).unwrap();
        assert!(md.contains("_None_"));
        assert!(md.contains("_No requirements_"));
    }
}
