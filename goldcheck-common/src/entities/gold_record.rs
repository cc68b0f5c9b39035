use serde::Serialize;

/// A single test vector: the inputs given to a kernel and the output expected from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoldRecord {
    /// First input
    pub ai: f32,

    /// Second input, ignored by unary kernels
    pub bi: f32,

    /// Result recorded when the gold data was produced, informational only
    pub res: f32,

    /// Expected output
    pub gold: f32,
}

impl GoldRecord {
    /// GoldRecord factory
    pub const fn new(ai: f32, bi: f32, res: f32, gold: f32) -> Self {
        Self { ai, bi, res, gold }
    }

    /// Format the record as a line of a gold file (without the line ending).
    pub fn to_csv_line(&self) -> String {
        format!("{},{},{},{}", self.ai, self.bi, self.res, self.gold)
    }
}
