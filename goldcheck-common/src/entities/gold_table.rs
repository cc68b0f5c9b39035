use std::ops::Deref;

use crate::entities::GoldRecord;

/// An ordered sequence of [GoldRecord].
///
/// Built-in tables are compiled in and only borrowed, tables read from a gold file are owned
/// and released when the table is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum GoldTable {
    /// Table compiled in the binary
    BuiltIn(&'static [GoldRecord]),

    /// Table read from an external gold file
    Loaded(Vec<GoldRecord>),
}

impl GoldTable {
    /// The records of the table
    pub fn records(&self) -> &[GoldRecord] {
        match self {
            GoldTable::BuiltIn(records) => records,
            GoldTable::Loaded(records) => records,
        }
    }

    /// `true` if the records were read from a gold file
    pub fn is_loaded(&self) -> bool {
        matches!(self, GoldTable::Loaded(_))
    }
}

impl Deref for GoldTable {
    type Target = [GoldRecord];

    fn deref(&self) -> &Self::Target {
        self.records()
    }
}

impl From<Vec<GoldRecord>> for GoldTable {
    fn from(records: Vec<GoldRecord>) -> Self {
        GoldTable::Loaded(records)
    }
}
