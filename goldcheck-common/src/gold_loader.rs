//! Read gold tables from external gold files.
//!
//! A gold file holds one record per line, four comma separated floats:
//! `input_a,input_b,previous_result,expected_output`.

use slog::{Logger, debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entities::{GoldRecord, GoldTable};
use crate::logging::LoggerExtensions;

/// Errors raised while reading a gold file.
#[derive(Debug, Error)]
pub enum GoldFileError {
    /// The gold file could not be opened.
    #[error("Cannot open '{}'", path.display())]
    Open {
        /// Path of the gold file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Reading the gold file failed.
    #[error("Failed reading '{}'", path.display())]
    Read {
        /// Path of the gold file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// A line did not hold exactly four floats.
    #[error("Failed parsing '{}' at line {index}: '{line}'", path.display())]
    Parse {
        /// Path of the gold file
        path: PathBuf,
        /// Index of the offending record
        index: usize,
        /// Content of the offending line
        line: String,
    },

    /// The table could not grow.
    #[error("Out of memory after reading {records} records")]
    OutOfMemory {
        /// Number of records read so far
        records: usize,
    },
}

/// Reads [GoldTable]s from gold files.
pub struct GoldFileLoader {
    logger: Logger,
}

impl GoldFileLoader {
    /// GoldFileLoader factory
    pub fn new(logger: Logger) -> Self {
        Self {
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    /// Read the gold file at the given path.
    pub fn load(&self, path: &Path) -> Result<GoldTable, GoldFileError> {
        debug!(self.logger, "Reading gold file"; "path" => %path.display());
        let file = File::open(path).map_err(|source| GoldFileError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_from_reader(BufReader::new(file), path)
    }

    /// Read gold records from any buffered reader, `path` is only used to report errors.
    pub fn load_from_reader<R: BufRead>(
        &self,
        mut reader: R,
        path: &Path,
    ) -> Result<GoldTable, GoldFileError> {
        let mut records: Vec<GoldRecord> = Vec::new();
        let mut line = String::new();

        loop {
            line.clear();
            // `read_line` retries the reads interrupted by a signal
            let bytes_read = reader.read_line(&mut line).map_err(|source| GoldFileError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            if bytes_read == 0 {
                break;
            }

            let content = line.trim();
            if content.is_empty() {
                continue;
            }

            let record = parse_record(content).ok_or_else(|| GoldFileError::Parse {
                path: path.to_path_buf(),
                index: records.len(),
                line: content.to_string(),
            })?;
            records
                .try_reserve(1)
                .map_err(|_| GoldFileError::OutOfMemory {
                    records: records.len(),
                })?;
            records.push(record);
        }

        if records.is_empty() {
            warn!(self.logger, "No gold data"; "path" => %path.display());
        } else {
            debug!(
                self.logger, "Gold file read";
                "path" => %path.display(), "records" => records.len()
            );
        }

        Ok(GoldTable::Loaded(records))
    }
}

fn parse_record(line: &str) -> Option<GoldRecord> {
    let fields = line
        .split(',')
        .map(|field| field.trim().parse::<f32>().ok())
        .collect::<Option<Vec<_>>>()?;

    match fields[..] {
        [ai, bi, res, gold] => Some(GoldRecord::new(ai, bi, res, gold)),
        _ => None,
    }
}
