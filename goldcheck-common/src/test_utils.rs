//! Test utilities
//!
//! Shared by the unit tests of this crate, its integration tests and the other workspace crates.

mod temp_dir;
mod test_logger;

pub use temp_dir::TempDir;
pub use test_logger::TestLogger;
