use anyhow::Context;
use clap::Parser;
use slog::{Logger, debug, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use goldcheck_common::StdResult;
use goldcheck_common::comparator::{
    DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE, ToleranceComparator,
};
use goldcheck_common::entities::GoldTable;
use goldcheck_common::functions::{FunctionRegistry, FunctionUnderTest};
use goldcheck_common::gold_loader::GoldFileLoader;
use goldcheck_common::harness::{GoldHarness, HarnessOutcome, RunMode};

use crate::CommandContext;
use crate::configuration::ConfigParameters;

/// Check a function against its gold data, or generate new gold data for it.
#[derive(Parser, Debug, Clone)]
pub struct GoldCommand {
    /// Generate gold data from the function outputs instead of checking them
    #[clap(short, long)]
    gold: bool,

    /// Gold file to use instead of the gold data built in the binary
    gold_file: Option<PathBuf>,

    /// List the functions that can be checked and exit
    #[clap(long)]
    list_functions: bool,

    /// Print the report as JSON
    #[clap(long)]
    json: bool,
}

impl GoldCommand {
    /// Main command execution
    pub fn execute(&self, context: CommandContext) -> StdResult<ExitCode> {
        let mut registry = FunctionRegistry::with_builtin_functions();
        if self.list_functions {
            for name in registry.names() {
                println!("{name}");
            }
            return Ok(ExitCode::SUCCESS);
        }

        let params = context.config_parameters()?;
        let function = Self::select_function(&mut registry, &params)?;
        let function_name = function.name().to_string();
        let outcome = self.run(function, &params, context.logger())?;

        if self.json {
            println!("{}", serde_json::to_string(&outcome.report)?);
        } else {
            print!("{}", outcome.report);
        }

        if let Some(path) = &outcome.generated_gold {
            println!("Gold data written to: {}", path.display());
            println!("You need to manually copy it to gold/{function_name}.dat");
        }

        Ok(if outcome.report.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }

    fn run(
        &self,
        function: FunctionUnderTest,
        params: &ConfigParameters,
        logger: &Logger,
    ) -> StdResult<HarnessOutcome> {
        let gold_output_dir = PathBuf::from(params.get_or("gold_output_dir", "."));
        let mode = if self.gold {
            RunMode::PrintGold
        } else {
            RunMode::AgainstGold
        };
        debug!(logger, "Gold command"; "function" => function.name(), "mode" => ?mode);

        let mut harness = GoldHarness::new(function, logger.clone())
            .with_gold_output_dir(&gold_output_dir);
        if let Some(gold_file) = &self.gold_file {
            let table = Self::load_gold_file(gold_file, logger)?;
            harness = harness.with_table(table);
        }

        Ok(harness.run(mode))
    }

    fn select_function(
        registry: &mut FunctionRegistry,
        params: &ConfigParameters,
    ) -> StdResult<FunctionUnderTest> {
        let name = params.require("function")?;
        let function = registry.take(name.trim())?;

        let absolute_tolerance = params.get_parsed::<f32>("absolute_tolerance")?;
        let relative_tolerance = params.get_parsed::<f32>("relative_tolerance")?;
        if absolute_tolerance.is_none() && relative_tolerance.is_none() {
            return Ok(function);
        }

        Ok(function.with_tolerance(ToleranceComparator::new(
            absolute_tolerance.unwrap_or(DEFAULT_ABSOLUTE_TOLERANCE),
            relative_tolerance.unwrap_or(DEFAULT_RELATIVE_TOLERANCE),
        )))
    }

    fn load_gold_file(gold_file: &Path, logger: &Logger) -> StdResult<GoldTable> {
        info!(logger, "Loading gold file"; "path" => %gold_file.display());
        let table = GoldFileLoader::new(logger.clone())
            .load(gold_file)
            .with_context(|| "Can not load the gold data")?;

        Ok(table)
    }
}
