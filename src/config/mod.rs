//! Manifest loading and output settings.
//!
//! A manifest declares output [`Settings`], kits and projects:
//!
//! ```
//! use tofukit::config::parse_manifest;
//! use std::path::Path;
//!
//! let manifest = parse_manifest(
//!     "settings:\n  output_format: markdown\nkits: []\n",
//!     Path::new("tofukit.yml"),
//! )
//! .unwrap();
//! assert_eq!(manifest.settings.output_format, "markdown");
//! ```
//!
//! Settings precedence is command-line flag, then environment variable,
//! then manifest, then default.

pub mod loader;
pub mod schema;

pub use loader::{find_manifest, load_manifest, load_manifest_from, parse_manifest, MANIFEST_NAMES};
pub use schema::{Manifest, Settings};
