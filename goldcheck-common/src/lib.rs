#![warn(missing_docs)]

//! Shared types and services used to regression-test numeric kernels against gold data.
//!
//! Provide:
//! - The gold [entities] ([GoldRecord][entities::GoldRecord] and
//!   [GoldTable][entities::GoldTable]) and a [loader][gold_loader] for external gold files.
//! - The [comparator] and [reference] strategies used to decide if an output is correct.
//! - The [functions] under test, grouped in a [FunctionRegistry][functions::FunctionRegistry].
//! - A small [suite] runner and the [harness] that wires everything together.
//! - Some test utilities shared with the other crates of the workspace, behind the
//!   `test_tools` feature.

pub mod comparator;
pub mod entities;
pub mod functions;
pub mod gold_loader;
pub mod harness;
pub mod logging;
pub mod reference;
pub mod suite;
#[cfg(any(test, feature = "test_tools"))]
pub mod test_utils;

/// Generic error type
pub type StdError = anyhow::Error;

/// Generic result type
pub type StdResult<T> = Result<T, StdError>;
