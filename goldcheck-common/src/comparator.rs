//! Decide whether an output produced by a kernel matches the expected one.

#[cfg(test)]
use mockall::automock;

/// Absolute tolerance of the default comparison rule.
pub const DEFAULT_ABSOLUTE_TOLERANCE: f32 = 0.001;

/// Relative tolerance of the default comparison rule.
pub const DEFAULT_RELATIVE_TOLERANCE: f32 = 0.00001;

/// Compares an actual output to an expected one.
#[cfg_attr(test, automock)]
pub trait Comparator {
    /// Returns `true` if `actual` is considered equal to `expected`.
    fn compare(&self, actual: f32, expected: f32) -> bool;
}

/// Dual tolerance comparison.
///
/// Two values are equal if their absolute difference is within the absolute tolerance, or if
/// their difference relative to the operand with the larger magnitude is within the relative
/// tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceComparator {
    absolute: f32,
    relative: f32,
}

impl ToleranceComparator {
    /// ToleranceComparator factory
    pub fn new(absolute: f32, relative: f32) -> Self {
        Self { absolute, relative }
    }
}

impl Default for ToleranceComparator {
    fn default() -> Self {
        Self::new(DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE)
    }
}

impl Comparator for ToleranceComparator {
    fn compare(&self, actual: f32, expected: f32) -> bool {
        let difference = actual - expected;
        if difference.abs() <= self.absolute {
            return true;
        }

        let largest = if actual.abs() > expected.abs() {
            actual
        } else {
            expected
        };

        (difference / largest).abs() <= self.relative
    }
}

impl<F: Fn(f32, f32) -> bool> Comparator for F {
    fn compare(&self, actual: f32, expected: f32) -> bool {
        self(actual, expected)
    }
}
