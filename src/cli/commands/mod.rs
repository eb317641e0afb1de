//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command starts from the same
//! loaded manifest (see [`workspace`]).

pub mod apply;
pub mod dispatcher;
pub mod plan;
pub mod show;
pub mod workspace;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
