//! The entities used by the gold harness.

mod gold_record;
mod gold_table;

pub use gold_record::GoldRecord;
pub use gold_table::GoldTable;
