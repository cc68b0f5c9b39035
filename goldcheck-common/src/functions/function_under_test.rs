use std::fmt::{Debug, Formatter};

use crate::comparator::{Comparator, ToleranceComparator};
use crate::entities::GoldRecord;
use crate::reference::{GoldReference, ReferenceGenerator};

/// Kernel taking one input sequence: `(a, out, n)`.
pub type UnaryKernel = fn(&[f32], &mut [f32], usize);

/// Kernel taking two input sequences: `(a, b, out, n)`.
pub type BinaryKernel = fn(&[f32], &[f32], &mut [f32], usize);

/// The callable being tested.
#[derive(Debug, Clone, Copy)]
pub enum Kernel {
    /// One input sequence
    Unary(UnaryKernel),

    /// Two input sequences
    Binary(BinaryKernel),
}

impl Kernel {
    /// Run the kernel on the first `n` inputs.
    ///
    /// `b` is ignored by unary kernels.
    pub fn invoke(&self, a: &[f32], b: &[f32], out: &mut [f32], n: usize) {
        match self {
            Kernel::Unary(kernel) => kernel(a, out, n),
            Kernel::Binary(kernel) => kernel(a, b, out, n),
        }
    }

    /// `true` if the kernel takes two input sequences
    pub fn is_binary(&self) -> bool {
        matches!(self, Kernel::Binary(_))
    }
}

/// How many output slots a kernel fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One output per input
    Vector,

    /// A single aggregate output, whatever the number of inputs
    Scalar,
}

impl OutputMode {
    /// Number of output slots a kernel may write for `n` inputs.
    pub fn output_len(&self, n: usize) -> usize {
        match self {
            OutputMode::Vector => n,
            OutputMode::Scalar => 1,
        }
    }
}

/// A named kernel with its built-in gold data and the strategies used to check it.
pub struct FunctionUnderTest {
    name: String,
    kernel: Kernel,
    output_mode: OutputMode,
    builtin_gold: &'static [GoldRecord],
    tolerance: ToleranceComparator,
    comparator: Option<Box<dyn Comparator>>,
    reference: Box<dyn ReferenceGenerator>,
}

impl FunctionUnderTest {
    /// Create a function whose kernel takes one input sequence.
    pub fn unary(name: &str, kernel: UnaryKernel, builtin_gold: &'static [GoldRecord]) -> Self {
        Self::new(name, Kernel::Unary(kernel), builtin_gold)
    }

    /// Create a function whose kernel takes two input sequences.
    pub fn binary(name: &str, kernel: BinaryKernel, builtin_gold: &'static [GoldRecord]) -> Self {
        Self::new(name, Kernel::Binary(kernel), builtin_gold)
    }

    fn new(name: &str, kernel: Kernel, builtin_gold: &'static [GoldRecord]) -> Self {
        Self {
            name: name.to_string(),
            kernel,
            output_mode: OutputMode::Vector,
            builtin_gold,
            tolerance: ToleranceComparator::default(),
            comparator: None,
            reference: Box::new(GoldReference),
        }
    }

    /// The kernel produces a single aggregate output.
    pub fn with_scalar_output(mut self) -> Self {
        self.output_mode = OutputMode::Scalar;
        self
    }

    /// Replace the tolerance comparison rule by a custom comparator.
    pub fn with_comparator<C: Comparator + 'static>(mut self, comparator: C) -> Self {
        self.comparator = Some(Box::new(comparator));
        self
    }

    /// Change the tolerances of the default comparison rule.
    ///
    /// Has no effect on the comparison if a custom comparator was set.
    pub fn with_tolerance(mut self, tolerance: ToleranceComparator) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replace the gold column by an independently computed reference.
    pub fn with_reference<R: ReferenceGenerator + 'static>(mut self, reference: R) -> Self {
        self.reference = Box::new(reference);
        self
    }

    /// Name of the function
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kernel of the function
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// Output mode of the kernel
    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Gold data compiled in the binary
    pub fn builtin_gold(&self) -> &'static [GoldRecord] {
        self.builtin_gold
    }

    /// `true` if a custom comparator replaces the tolerance rule
    #[cfg(test)]
    pub fn has_custom_comparator(&self) -> bool {
        self.comparator.is_some()
    }

    /// Compare an output of the kernel to its expected value.
    pub fn compare(&self, actual: f32, expected: f32) -> bool {
        match &self.comparator {
            Some(comparator) => comparator.compare(actual, expected),
            None => self.tolerance.compare(actual, expected),
        }
    }

    /// Compute the reference outputs of the given records.
    pub fn generate_reference(&self, records: &[GoldRecord], out: &mut [f32]) {
        self.reference.generate(records, out);
    }

    /// Describe a call of the kernel, ie: `add_f32(1, 2)`.
    pub fn describe_call(&self, record_index: usize, ai: &[f32], bi: &[f32]) -> String {
        if self.kernel.is_binary() {
            format!("{}({}, {})", self.name, ai[record_index], bi[record_index])
        } else {
            format!("{}({})", self.name, ai[record_index])
        }
    }
}

impl Debug for FunctionUnderTest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionUnderTest")
            .field("name", &self.name)
            .field("kernel", &self.kernel)
            .field("output_mode", &self.output_mode)
            .field("builtin_gold_len", &self.builtin_gold.len())
            .field("tolerance", &self.tolerance)
            .field("custom_comparator", &self.comparator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use crate::comparator::MockComparator;
    use crate::functions::kernels;
    use crate::reference::MockReferenceGenerator;

    use super::*;

    const GOLD: &[GoldRecord] = &[GoldRecord::new(1.0, 2.0, 0.0, 3.0)];

    #[test]
    fn default_comparison_is_the_tolerance_rule() {
        let function = FunctionUnderTest::binary("add_f32", kernels::add_f32, GOLD);

        assert!(!function.has_custom_comparator());
        assert!(function.compare(1000.0, 1000.005));
        assert!(!function.compare(1.0, 1.1));
    }

    #[test]
    fn tolerance_can_be_widened() {
        let function = FunctionUnderTest::binary("add_f32", kernels::add_f32, GOLD)
            .with_tolerance(ToleranceComparator::new(0.2, 0.0));

        assert!(function.compare(1.0, 1.1));
    }

    #[test]
    fn custom_comparator_replaces_the_tolerance_rule() {
        let mut comparator = MockComparator::new();
        comparator
            .expect_compare()
            .with(eq(1.0_f32), eq(5.0_f32))
            .return_const(true)
            .once();
        let function = FunctionUnderTest::binary("add_f32", kernels::add_f32, GOLD)
            .with_comparator(comparator)
            .with_tolerance(ToleranceComparator::new(0.0, 0.0));

        assert!(function.has_custom_comparator());
        assert!(function.compare(1.0, 5.0));
    }

    #[test]
    fn reference_generation_is_delegated() {
        let mut reference = MockReferenceGenerator::new();
        reference
            .expect_generate()
            .withf(|records, out| records.len() == 1 && out.len() == 1)
            .returning(|_, out| out[0] = 42.0)
            .once();
        let function = FunctionUnderTest::binary("add_f32", kernels::add_f32, GOLD)
            .with_reference(reference);
        let mut out = [0.0];

        function.generate_reference(GOLD, &mut out);

        assert_eq!([42.0], out);
    }

    #[test]
    fn default_reference_is_the_gold_column() {
        let function = FunctionUnderTest::binary("add_f32", kernels::add_f32, GOLD);
        let mut out = [0.0];

        function.generate_reference(GOLD, &mut out);

        assert_eq!([3.0], out);
    }

    #[test]
    fn scalar_output_fills_a_single_slot() {
        let function = FunctionUnderTest::unary("sum_f32", kernels::sum_f32, GOLD)
            .with_scalar_output();

        assert_eq!(OutputMode::Scalar, function.output_mode());
        assert_eq!(1, function.output_mode().output_len(12));
        assert_eq!(12, OutputMode::Vector.output_len(12));
    }

    #[test]
    fn describe_call_with_the_inputs_of_the_kernel() {
        let unary = FunctionUnderTest::unary("abs_f32", kernels::abs_f32, GOLD);
        let binary = FunctionUnderTest::binary("add_f32", kernels::add_f32, GOLD);

        assert_eq!("abs_f32(-1.5)", unary.describe_call(1, &[0.0, -1.5], &[0.0, 2.0]));
        assert_eq!("add_f32(-1.5, 2)", binary.describe_call(1, &[0.0, -1.5], &[0.0, 2.0]));
    }
}
