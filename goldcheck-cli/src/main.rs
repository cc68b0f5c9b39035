#![doc = include_str!("../README.md")]

use anyhow::Context;
use clap::Parser;
use config::{ConfigBuilder, Map, Source, Value, ValueKind, builder::DefaultState};
use slog::{Drain, Fuse, Level, Logger, debug};
use slog_term::Decorator;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use goldcheck_cli::CommandContext;
use goldcheck_cli::commands::GoldCommand;
use goldcheck_common::StdResult;

enum LogOutputType {
    StdErr,
    File(String),
}

impl LogOutputType {
    fn get_writer(&self) -> StdResult<Box<dyn Write + Send>> {
        let writer: Box<dyn Write + Send> = match self {
            LogOutputType::StdErr => Box::new(std::io::stderr()),
            LogOutputType::File(filepath) => Box::new(
                File::create(filepath)
                    .with_context(|| format!("Can not create output log file: {filepath}"))?,
            ),
        };

        Ok(writer)
    }
}

#[derive(Parser, Debug, Clone)]
#[clap(name = "goldcheck")]
#[clap(
    about = "This program checks numeric kernels against recorded gold data, or regenerates it.",
    long_about = None
)]
#[command(version)]
pub struct Args {
    #[clap(flatten)]
    command: GoldCommand,

    /// Run Mode.
    #[clap(long, env = "RUN_MODE", default_value = "dev")]
    run_mode: String,

    /// Verbosity level (-v=info, -vv=debug, -vvv=trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory where configuration file is located.
    #[clap(long, default_value = "./config")]
    pub config_directory: PathBuf,

    /// Name of the function to check.
    #[clap(long)]
    function: Option<String>,

    /// Override the absolute tolerance of the comparisons.
    #[clap(long)]
    absolute_tolerance: Option<f32>,

    /// Override the relative tolerance of the comparisons.
    #[clap(long)]
    relative_tolerance: Option<f32>,

    /// Directory where the generated gold files are written.
    #[clap(long)]
    gold_output_dir: Option<PathBuf>,

    /// Enable JSON output for logs displayed according to verbosity level
    #[clap(long)]
    log_format_json: bool,

    /// Redirect the logs to a file
    #[clap(long, alias("o"))]
    log_output: Option<String>,
}

impl Args {
    pub fn execute(&self, root_logger: Logger) -> StdResult<ExitCode> {
        debug!(root_logger, "Goldcheck version: {}", env!("CARGO_PKG_VERSION"));
        debug!(root_logger, "Run Mode: {}", self.run_mode);
        let filename = format!("{}/{}.json", self.config_directory.display(), self.run_mode);
        debug!(root_logger, "Reading configuration file '{filename}'.");
        let config: ConfigBuilder<DefaultState> = config::Config::builder()
            .add_source(config::File::with_name(&filename).required(false))
            .add_source(config::Environment::with_prefix("GOLDCHECK"))
            .add_source(self.clone())
            .set_default("gold_output_dir", ".")?;
        let context = CommandContext::new(config, root_logger);

        self.command.execute(context)
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::Warning,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        }
    }

    fn get_log_output_type(&self) -> LogOutputType {
        if let Some(output_filepath) = &self.log_output {
            LogOutputType::File(output_filepath.to_string())
        } else {
            LogOutputType::StdErr
        }
    }

    fn wrap_drain<D: Decorator + Send + 'static>(&self, decorator: D) -> Fuse<slog_async::Async> {
        let drain = slog_term::CompactFormat::new(decorator).build().fuse();
        let drain = slog::LevelFilter::new(drain, self.log_level()).fuse();

        slog_async::Async::new(drain).build().fuse()
    }

    fn build_logger(&self) -> StdResult<Logger> {
        let log_output_type = self.get_log_output_type();
        let writer = log_output_type.get_writer()?;

        let drain = if self.log_format_json {
            let drain = slog_bunyan::with_name("goldcheck", writer)
                .set_pretty(false)
                .build()
                .fuse();
            let drain = slog::LevelFilter::new(drain, self.log_level()).fuse();

            slog_async::Async::new(drain).build().fuse()
        } else {
            match log_output_type {
                LogOutputType::StdErr => self.wrap_drain(slog_term::TermDecorator::new().build()),
                LogOutputType::File(_) => self.wrap_drain(slog_term::PlainDecorator::new(writer)),
            }
        };

        Ok(Logger::root(Arc::new(drain), slog::o!()))
    }
}

impl Source for Args {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        let mut map = Map::new();
        let namespace = "clap arguments".to_string();

        if let Some(function) = self.function.clone() {
            map.insert(
                "function".to_string(),
                Value::new(Some(&namespace), ValueKind::from(function)),
            );
        }
        if let Some(absolute_tolerance) = self.absolute_tolerance {
            map.insert(
                "absolute_tolerance".to_string(),
                Value::new(
                    Some(&namespace),
                    ValueKind::from(absolute_tolerance.to_string()),
                ),
            );
        }
        if let Some(relative_tolerance) = self.relative_tolerance {
            map.insert(
                "relative_tolerance".to_string(),
                Value::new(
                    Some(&namespace),
                    ValueKind::from(relative_tolerance.to_string()),
                ),
            );
        }
        if let Some(gold_output_dir) = &self.gold_output_dir {
            map.insert(
                "gold_output_dir".to_string(),
                Value::new(
                    Some(&namespace),
                    ValueKind::from(gold_output_dir.to_string_lossy().to_string()),
                ),
            );
        }

        Ok(map)
    }
}

fn main() -> StdResult<ExitCode> {
    let args = Args::parse();
    let logger = args.build_logger()?;

    args.execute(logger)
}
