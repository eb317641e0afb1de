//! Kit catalog: the canonical data model and its decoder.
//!
//! - [`kind`] - The closed set of kit kinds
//! - [`reference`] - `@<kind>.<name>` references and naming rules
//! - [`model`] - [`Kit`], [`Requirement`], [`Verification`], [`Project`]
//! - [`decode`] - Strict decoding from loosely-typed values
//!
//! # Example
//!
//! ```
//! use tofukit::catalog::{decode_kit, KitKind};
//! use serde_json::json;
//!
//! let kit = decode_kit(&json!({
//!     "type": "language",
//!     "name": "python",
//!     "version": "3.12",
//!     "requirements": [{"name": "install", "instructions": ["uv python install"]}]
//! }))
//! .unwrap();
//!
//! assert_eq!(kit.id, "language.python");
//! assert_eq!(kit.kind, KitKind::Language);
//! ```

pub mod decode;
pub mod kind;
pub mod model;
pub mod reference;

pub use decode::{decode_kit, decode_project, decode_requirement, encode_kit};
pub use kind::KitKind;
pub use model::{project_id, Kit, Project, Requirement, Verification};
pub use reference::{is_valid_name, kit_id, KitRef};
