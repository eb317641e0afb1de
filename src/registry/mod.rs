//! Kit registry.
//!
//! Holds every kit declared during one provisioning session. The registry
//! is an explicit object owned by the session and passed by reference to
//! the aggregator; it is never persisted.
//!
//! # Example
//!
//! ```
//! use tofukit::catalog::{Kit, KitKind};
//! use tofukit::registry::KitRegistry;
//!
//! let registry = KitRegistry::new();
//! registry.store(Kit::new(KitKind::Tool, "uv", "0.4"));
//!
//! assert!(registry.fetch("tool.uv").is_some());
//! assert!(registry.fetch("tool.pip").is_none());
//! ```

pub mod store;

pub use store::{KitRegistry, RegistryView};
