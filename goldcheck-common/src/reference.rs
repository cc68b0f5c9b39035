//! Produce reference outputs, computed independently from the kernel under test.

#[cfg(test)]
use mockall::automock;

use crate::entities::GoldRecord;

/// Generates the reference output of every gold record.
#[cfg_attr(test, automock)]
pub trait ReferenceGenerator {
    /// Write into `out` the reference outputs of the given records, `out` holds at least
    /// `records.len()` elements.
    fn generate(&self, records: &[GoldRecord], out: &mut [f32]);
}

impl<F: Fn(&[GoldRecord], &mut [f32])> ReferenceGenerator for F {
    fn generate(&self, records: &[GoldRecord], out: &mut [f32]) {
        self(records, out)
    }
}

/// Uses the gold column as reference.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoldReference;

impl ReferenceGenerator for GoldReference {
    fn generate(&self, records: &[GoldRecord], out: &mut [f32]) {
        for (slot, record) in out.iter_mut().zip(records) {
            *slot = record.gold;
        }
    }
}

/// Evaluates a unary function in double precision on the first input.
#[derive(Debug, Clone, Copy)]
pub struct UnaryReference(pub fn(f64) -> f64);

impl ReferenceGenerator for UnaryReference {
    fn generate(&self, records: &[GoldRecord], out: &mut [f32]) {
        for (slot, record) in out.iter_mut().zip(records) {
            *slot = (self.0)(f64::from(record.ai)) as f32;
        }
    }
}

/// Evaluates a binary function in double precision on both inputs.
#[derive(Debug, Clone, Copy)]
pub struct BinaryReference(pub fn(f64, f64) -> f64);

impl ReferenceGenerator for BinaryReference {
    fn generate(&self, records: &[GoldRecord], out: &mut [f32]) {
        for (slot, record) in out.iter_mut().zip(records) {
            *slot = (self.0)(f64::from(record.ai), f64::from(record.bi)) as f32;
        }
    }
}

/// Reduces all the records to a single value, written in the first slot.
#[derive(Debug, Clone, Copy)]
pub struct ScalarReference(pub fn(&[GoldRecord]) -> f64);

impl ReferenceGenerator for ScalarReference {
    fn generate(&self, records: &[GoldRecord], out: &mut [f32]) {
        if let Some(first) = out.first_mut() {
            *first = (self.0)(records) as f32;
        }
    }
}
