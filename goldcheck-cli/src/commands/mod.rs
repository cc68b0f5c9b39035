//! Commands module
//!
//! This module holds the commands that can be run from the CLI.

mod gold;

pub use gold::*;
