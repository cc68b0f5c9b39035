use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::StdResult;
use crate::entities::GoldRecord;
use crate::functions::{FunctionUnderTest, OutputMode};
use crate::harness::{HarnessContext, OUTPUT_END_MARKER};
use crate::suite::{Checker, TestCase, Verification};

/// Runs the kernel on the gold inputs, then compares its outputs to the gold column.
///
/// The verification is skipped when generating gold data.
pub struct AgainstGoldCase<'a> {
    function: &'a FunctionUnderTest,
}

impl<'a> AgainstGoldCase<'a> {
    /// AgainstGoldCase factory
    pub fn new(function: &'a FunctionUnderTest) -> Self {
        Self { function }
    }
}

impl TestCase<HarnessContext> for AgainstGoldCase<'_> {
    fn name(&self) -> &str {
        "against_gold"
    }

    fn execute(&self, context: &mut HarnessContext) -> StdResult<()> {
        context.run_kernel(self.function.kernel());

        Ok(())
    }

    fn verify(&self, context: &HarnessContext, checker: &mut Checker) -> Verification {
        if context.is_generating_gold() {
            return Verification::Skipped;
        }

        let expected: Vec<f32> = context.table().iter().map(|r| r.gold).collect();
        check_outputs(self.function, context, &expected, checker);
        checker.check(context.end_marker() == OUTPUT_END_MARKER, || {
            format!("{}: output end marker was overwritten", self.function.name())
        });

        Verification::Checked
    }
}

/// Compares the kernel outputs to independently computed reference outputs.
pub struct AgainstReferenceCase<'a> {
    function: &'a FunctionUnderTest,
}

impl<'a> AgainstReferenceCase<'a> {
    /// AgainstReferenceCase factory
    pub fn new(function: &'a FunctionUnderTest) -> Self {
        Self { function }
    }
}

impl TestCase<HarnessContext> for AgainstReferenceCase<'_> {
    fn name(&self) -> &str {
        "against_ref"
    }

    fn execute(&self, context: &mut HarnessContext) -> StdResult<()> {
        context.fill_reference(self.function);

        Ok(())
    }

    fn verify(&self, context: &HarnessContext, checker: &mut Checker) -> Verification {
        check_outputs(self.function, context, context.reference(), checker);

        Verification::Checked
    }
}

/// Writes the kernel outputs as a new gold file, `<output_dir>/<function name>.res`.
pub struct PrintGoldCase {
    output_path: PathBuf,
}

impl PrintGoldCase {
    /// PrintGoldCase factory
    pub fn new(function: &FunctionUnderTest, output_dir: &Path) -> Self {
        Self {
            output_path: gold_output_path(function, output_dir),
        }
    }

    fn write_gold<W: Write>(context: &HarnessContext, writer: &mut W) -> StdResult<()> {
        for i in 0..context.record_count() {
            let output = match context.output_mode() {
                OutputMode::Vector => context.res()[i],
                OutputMode::Scalar => context.res()[0],
            };
            let record = GoldRecord::new(context.ai()[i], context.bi()[i], 0.0, output);
            writeln!(writer, "{}", record.to_csv_line())?;
        }
        writer.flush()?;

        Ok(())
    }
}

impl TestCase<HarnessContext> for PrintGoldCase {
    fn name(&self) -> &str {
        "print_gold"
    }

    fn execute(&self, context: &mut HarnessContext) -> StdResult<()> {
        let file = File::create(&self.output_path).with_context(|| {
            format!("Can not create gold file: '{}'", self.output_path.display())
        })?;

        Self::write_gold(context, &mut BufWriter::new(file)).with_context(|| {
            format!("Can not write gold file: '{}'", self.output_path.display())
        })
    }
}

/// Path of the gold file generated for the given function.
pub fn gold_output_path(function: &FunctionUnderTest, output_dir: &Path) -> PathBuf {
    output_dir.join(format!("{}.res", function.name()))
}

fn check_outputs(
    function: &FunctionUnderTest,
    context: &HarnessContext,
    expected: &[f32],
    checker: &mut Checker,
) {
    for i in 0..context.checked_len() {
        let actual = context.res()[i];
        checker.check(function.compare(actual, expected[i]), || {
            format!(
                "{}: {} != {}",
                function.describe_call(i, context.ai(), context.bi()),
                actual,
                expected[i]
            )
        });
    }
}
