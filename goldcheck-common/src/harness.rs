//! Check a [FunctionUnderTest] against its gold data, or produce new gold data for it.
//!
//! Two suites share the same [HarnessContext]:
//! - `<name>_suite`: `against_gold` runs the kernel and compares it to the gold column,
//!   `against_ref` compares it to the reference outputs.
//! - `<name>_print_gold_suite`: `against_gold` runs the kernel (its verification is skipped),
//!   `print_gold` writes the outputs to `<name>.res`.

mod cases;
mod context;

pub use cases::*;
pub use context::*;

use slog::{Logger, debug};
use std::path::{Path, PathBuf};

use crate::entities::GoldTable;
use crate::functions::FunctionUnderTest;
use crate::logging::LoggerExtensions;
use crate::suite::{SuiteReport, TestSuite};

/// What the harness is run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Compare the kernel outputs to the gold data
    AgainstGold,

    /// Write the kernel outputs as new gold data
    PrintGold,
}

/// Outcome of a harness run.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessOutcome {
    /// Report of the suite that was run
    pub report: SuiteReport,

    /// Path of the gold file written, in [RunMode::PrintGold] only
    pub generated_gold: Option<PathBuf>,
}

/// Runs the gold suites of a single function.
pub struct GoldHarness {
    function: FunctionUnderTest,
    table: GoldTable,
    gold_output_dir: PathBuf,
    logger: Logger,
}

impl GoldHarness {
    /// Create a harness using the built-in gold data of the function.
    pub fn new(function: FunctionUnderTest, logger: Logger) -> Self {
        let table = GoldTable::BuiltIn(function.builtin_gold());
        let logger = logger
            .new_with_component_name::<Self>()
            .new(slog::o!("function" => function.name().to_string()));

        Self {
            function,
            table,
            gold_output_dir: PathBuf::from("."),
            logger,
        }
    }

    /// Use the given table instead of the built-in gold data.
    pub fn with_table(mut self, table: GoldTable) -> Self {
        self.table = table;
        self
    }

    /// Directory where generated gold files are written, default to the working directory.
    pub fn with_gold_output_dir(mut self, gold_output_dir: &Path) -> Self {
        self.gold_output_dir = gold_output_dir.to_path_buf();
        self
    }

    /// Name of the suite run for the given mode
    pub fn suite_name(&self, mode: RunMode) -> String {
        match mode {
            RunMode::AgainstGold => format!("{}_suite", self.function.name()),
            RunMode::PrintGold => format!("{}_print_gold_suite", self.function.name()),
        }
    }

    /// Run the suite matching the given mode.
    pub fn run(self, mode: RunMode) -> HarnessOutcome {
        let suite_name = self.suite_name(mode);
        let generate_gold = mode == RunMode::PrintGold;
        debug!(
            self.logger, "Setting up harness";
            "records" => self.table.len(), "loaded" => self.table.is_loaded(), "mode" => ?mode
        );
        let mut context =
            HarnessContext::setup(self.table, self.function.output_mode(), generate_gold);

        let suite = TestSuite::new(&suite_name, self.logger.clone())
            .with_case(AgainstGoldCase::new(&self.function));
        let (report, generated_gold) = match mode {
            RunMode::AgainstGold => {
                let suite = suite.with_case(AgainstReferenceCase::new(&self.function));
                (suite.run(&mut context), None)
            }
            RunMode::PrintGold => {
                let print_gold = PrintGoldCase::new(&self.function, &self.gold_output_dir);
                let suite = suite.with_case(print_gold);
                let report = suite.run(&mut context);
                let generated_gold = report
                    .is_success()
                    .then(|| gold_output_path(&self.function, &self.gold_output_dir));
                (report, generated_gold)
            }
        };

        let table = context.teardown();
        debug!(self.logger, "Harness torn down"; "released_loaded_table" => table.is_loaded());

        HarnessOutcome {
            report,
            generated_gold,
        }
    }
}
