//! Manifest discovery and loading.

use crate::config::schema::Manifest;
use crate::error::{Result, TofukitError};
use std::fs;
use std::path::{Path, PathBuf};

/// File names checked, in order, when no manifest path is given.
pub const MANIFEST_NAMES: &[&str] = &["tofukit.yml", "tofukit.yaml", "tofukit.json"];

/// Find the manifest in a directory.
pub fn find_manifest(root: &Path) -> Option<PathBuf> {
    MANIFEST_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Load and parse a manifest file.
///
/// # Errors
///
/// Returns `ManifestNotFound` if the file doesn't exist.
/// Returns `ManifestParse` if it is not valid YAML or JSON.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TofukitError::ManifestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TofukitError::Io(e)
        }
    })?;

    parse_manifest(&content, path)
}

/// Parse manifest content. JSON manifests go through the same parser.
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    if content.trim().is_empty() {
        return Ok(Manifest::default());
    }
    serde_yaml::from_str(content).map_err(|e| TofukitError::ManifestParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the manifest at `explicit`, or the one discovered in `root`.
pub fn load_manifest_from(root: &Path, explicit: Option<&Path>) -> Result<Manifest> {
    match explicit {
        Some(path) => load_manifest(path),
        None => {
            let path = find_manifest(root).ok_or_else(|| TofukitError::ManifestNotFound {
                path: root.join(MANIFEST_NAMES[0]),
            })?;
            load_manifest(&path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_manifest_prefers_yml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tofukit.json"), "{}").unwrap();
        fs::write(temp.path().join("tofukit.yml"), "").unwrap();

        assert_eq!(find_manifest(temp.path()), Some(temp.path().join("tofukit.yml")));
    }

    #[test]
    fn find_manifest_returns_none_when_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_manifest(temp.path()).is_none());
    }

    #[test]
    fn load_manifest_reads_kits_and_projects() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tofukit.yml");
        fs::write(
            &path,
            r#"
settings:
  output_path: ctx
kits:
  - id: tool.uv
    type: tool
    name: uv
    version: "0.4"
projects:
  - name: demo
    version: "1.0.0"
    depends_on: ["@tool.uv"]
"#,
        )
        .unwrap();

        let manifest = load_manifest(&path).unwrap();
        assert_eq!(manifest.settings.output_path, PathBuf::from("ctx"));
        assert_eq!(manifest.kits.len(), 1);
        assert_eq!(manifest.kits[0]["id"], "tool.uv");
        assert_eq!(manifest.projects[0]["depends_on"][0], "@tool.uv");
    }

    #[test]
    fn load_manifest_accepts_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tofukit.json");
        fs::write(&path, r#"{"settings": {"output_format": "yaml"}, "kits": []}"#).unwrap();

        let manifest = load_manifest(&path).unwrap();
        assert_eq!(manifest.settings.output_format, "yaml");
    }

    #[test]
    fn load_manifest_missing_file() {
        let result = load_manifest(Path::new("/nonexistent/tofukit.yml"));
        assert!(matches!(result, Err(TofukitError::ManifestNotFound { .. })));
    }

    #[test]
    fn parse_manifest_invalid_yaml() {
        let result = parse_manifest("kits: [unclosed", Path::new("tofukit.yml"));
        assert!(matches!(result, Err(TofukitError::ManifestParse { .. })));
    }

    #[test]
    fn load_manifest_from_reports_default_name() {
        let temp = TempDir::new().unwrap();
        let err = load_manifest_from(temp.path(), None).unwrap_err();
        match err {
            TofukitError::ManifestNotFound { path } => {
                assert_eq!(path, temp.path().join("tofukit.yml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
