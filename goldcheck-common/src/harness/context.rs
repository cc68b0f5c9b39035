use crate::entities::GoldTable;
use crate::functions::{FunctionUnderTest, Kernel, OutputMode};

/// Value written right after the last output slot a kernel may write, to detect overruns.
pub const OUTPUT_END_MARKER: f32 = 60189537703610376.0;

/// Buffers shared by the cases of a gold suite.
///
/// `ai` and `bi` are copied from the gold table, `res` receives the kernel outputs followed by
/// the [OUTPUT_END_MARKER], `reference` receives the reference outputs.
#[derive(Debug)]
pub struct HarnessContext {
    table: GoldTable,
    output_mode: OutputMode,
    generate_gold: bool,
    ai: Vec<f32>,
    bi: Vec<f32>,
    res: Vec<f32>,
    reference: Vec<f32>,
}

impl HarnessContext {
    /// Allocate and fill the buffers for the given table.
    pub fn setup(table: GoldTable, output_mode: OutputMode, generate_gold: bool) -> Self {
        let n = table.len();
        let output_len = output_mode.output_len(n);
        let mut res = vec![0.0; output_len + 1];
        res[output_len] = OUTPUT_END_MARKER;

        Self {
            ai: table.iter().map(|r| r.ai).collect(),
            bi: table.iter().map(|r| r.bi).collect(),
            res,
            reference: vec![0.0; n],
            table,
            output_mode,
            generate_gold,
        }
    }

    /// Release the buffers and give back the gold table.
    pub fn teardown(self) -> GoldTable {
        self.table
    }

    /// Run the kernel on the gold inputs, writing to the outputs buffer.
    pub fn run_kernel(&mut self, kernel: Kernel) {
        let n = self.record_count();
        kernel.invoke(&self.ai, &self.bi, &mut self.res, n);
    }

    /// Compute the reference outputs of the function for the gold records.
    pub fn fill_reference(&mut self, function: &FunctionUnderTest) {
        function.generate_reference(&self.table, &mut self.reference);
    }

    /// The gold table
    pub fn table(&self) -> &GoldTable {
        &self.table
    }

    /// Number of gold records
    pub fn record_count(&self) -> usize {
        self.table.len()
    }

    /// `true` when running to produce gold data instead of checking it
    pub fn is_generating_gold(&self) -> bool {
        self.generate_gold
    }

    /// Output mode of the kernel
    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Number of output slots the kernel may write
    pub fn output_len(&self) -> usize {
        self.output_mode.output_len(self.record_count())
    }

    /// Number of records whose output is checked
    pub fn checked_len(&self) -> usize {
        self.output_len().min(self.record_count())
    }

    /// First inputs
    pub fn ai(&self) -> &[f32] {
        &self.ai
    }

    /// Second inputs
    pub fn bi(&self) -> &[f32] {
        &self.bi
    }

    /// Outputs of the kernel, followed by the end marker
    pub fn res(&self) -> &[f32] {
        &self.res
    }

    /// Reference outputs
    pub fn reference(&self) -> &[f32] {
        &self.reference
    }

    /// Value found at the end marker position
    pub fn end_marker(&self) -> f32 {
        self.res[self.output_len()]
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::GoldRecord;
    use crate::functions::kernels;
    use crate::reference::BinaryReference;

    use super::*;

    const GOLD: &[GoldRecord] = &[
        GoldRecord::new(1.0, 2.0, 0.0, 3.0),
        GoldRecord::new(4.0, 5.0, 0.0, 9.0),
        GoldRecord::new(6.0, 7.0, 0.0, 13.0),
    ];

    #[test]
    fn setup_copies_inputs_and_places_the_end_marker_after_the_outputs() {
        let context = HarnessContext::setup(GoldTable::BuiltIn(GOLD), OutputMode::Vector, false);

        assert_eq!([1.0, 4.0, 6.0], context.ai());
        assert_eq!([2.0, 5.0, 7.0], context.bi());
        assert_eq!([0.0, 0.0, 0.0, OUTPUT_END_MARKER], context.res());
        assert_eq!(3, context.reference().len());
        assert_eq!(OUTPUT_END_MARKER, context.end_marker());
    }

    #[test]
    fn scalar_output_reserves_a_single_slot() {
        let context = HarnessContext::setup(GoldTable::BuiltIn(GOLD), OutputMode::Scalar, false);

        assert_eq!([0.0, OUTPUT_END_MARKER], context.res());
        assert_eq!(1, context.output_len());
        assert_eq!(1, context.checked_len());
        assert_eq!(3, context.record_count());
    }

    #[test]
    fn scalar_output_on_empty_table_checks_nothing() {
        let context = HarnessContext::setup(GoldTable::Loaded(vec![]), OutputMode::Scalar, false);

        assert_eq!(0, context.checked_len());
        assert_eq!(OUTPUT_END_MARKER, context.end_marker());
    }

    #[test]
    fn run_kernel_writes_the_outputs_before_the_end_marker() {
        let mut context =
            HarnessContext::setup(GoldTable::BuiltIn(GOLD), OutputMode::Vector, false);

        context.run_kernel(Kernel::Binary(kernels::add_f32));

        assert_eq!([3.0, 9.0, 13.0, OUTPUT_END_MARKER], context.res());
    }

    #[test]
    fn fill_reference_uses_the_function_reference_generator() {
        let function = FunctionUnderTest::binary("add_f32", kernels::add_f32, GOLD)
            .with_reference(BinaryReference(|a, b| a - b));
        let mut context =
            HarnessContext::setup(GoldTable::BuiltIn(GOLD), OutputMode::Vector, false);

        context.fill_reference(&function);

        assert_eq!([-1.0, -1.0, -1.0], context.reference());
    }

    #[test]
    fn teardown_gives_back_the_table() {
        let context = HarnessContext::setup(GOLD.to_vec().into(), OutputMode::Vector, true);
        assert!(context.is_generating_gold());

        let table = context.teardown();

        assert_eq!(GoldTable::Loaded(GOLD.to_vec()), table);
    }
}
