//! Resource lifecycle for a single run.
//!
//! A [`Session`] owns the kit registry and the output settings. Kits are
//! created, updated, read and deleted against the registry; projects are
//! aggregated on every create or update and their documents rewritten.

mod manager;
mod outcome;

pub use manager::Session;
pub use outcome::ProjectOutcome;
