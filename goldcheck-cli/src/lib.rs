#![warn(missing_docs)]

//! Library of the `goldcheck` command line.
//!
//! Holds the [commands] and the [configuration] shared by them, see the `goldcheck` binary for
//! the argument parsing and the logger setup.

pub mod commands;
mod command_context;
pub mod configuration;

pub use command_context::CommandContext;
