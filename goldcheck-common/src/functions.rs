//! The kernels under test and their registry.

mod function_under_test;
mod gold_tables;
pub mod kernels;
mod registry;

pub use function_under_test::*;
pub use registry::*;
