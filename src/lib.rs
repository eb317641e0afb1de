//! tofukit - Project context documents from declarative technology kits.
//!
//! A kit describes one component of a project's stack (a language,
//! framework, tool, ...) and the requirements for setting it up. Projects
//! select kits, either directly or by reference through a registry, and
//! tofukit writes one context document per project describing everything
//! the project depends on.
//!
//! # Modules
//!
//! - [`aggregate`] - Kit resolution, dependency closure and requirement merging
//! - [`catalog`] - Kit, requirement and project types and their decoding
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Manifest loading and output settings
//! - [`context`] - Document rendering and atomic writing
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Session-scoped kit storage
//! - [`session`] - Kit and project lifecycle
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tofukit::config::Settings;
//! use tofukit::session::Session;
//!
//! let session = Session::new(Settings::default());
//! session
//!     .create_kit(&json!({"type": "tool", "name": "uv", "version": "0.4"}))
//!     .unwrap();
//!
//! let aggregated = session
//!     .plan_project(&json!({"name": "demo", "version": "1.0.0", "depends_on": ["@tool.uv"]}))
//!     .unwrap();
//! assert_eq!(aggregated.dependencies(), vec!["@kit.tool.uv"]);
//! ```

pub mod aggregate;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod registry;
pub mod session;
pub mod ui;

pub use error::{Result, TofukitError};
