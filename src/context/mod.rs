//! Project context documents.
//!
//! An [`AggregatedProject`](crate::aggregate::AggregatedProject) is turned into
//! a [`ContextDocument`] and rendered in one of the [`OutputFormat`]s. The
//! [`ContextWriter`] persists the result atomically.
//!
//! # Example
//!
//! ```
//! use tofukit::aggregate::Aggregator;
//! use tofukit::catalog::Project;
//! use tofukit::context::{ContextWriter, OutputFormat};
//! use tofukit::registry::KitRegistry;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let registry = KitRegistry::new();
//! let aggregated = Aggregator::new(&registry)
//!     .aggregate(&Project::new("demo", "1.0.0"))
//!     .unwrap();
//!
//! let writer = ContextWriter::new(dir.path(), OutputFormat::Json);
//! let path = writer.write(&aggregated).unwrap();
//! assert!(path.ends_with("project-demo.json"));
//! ```

pub mod document;
pub mod format;
pub mod render;
pub mod writer;

pub use document::{ContextDocument, KitEntry, ProjectSection};
pub use format::OutputFormat;
pub use render::{ContextRenderer, JsonRenderer, MarkdownRenderer, YamlRenderer};
pub use writer::ContextWriter;
