//! A minimal test suite runner.
//!
//! A [TestSuite] runs its [TestCase]s in order against a shared context and summarizes the
//! outcomes in a [SuiteReport]. A failed assertion fails its case but never stops the run.

use serde::Serialize;
use slog::{Logger, debug, info, warn};
use std::fmt::{Display, Formatter};

use crate::StdResult;
use crate::logging::LoggerExtensions;

/// Result of the verification phase of a [TestCase].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The assertions were evaluated
    Checked,

    /// The verification was intentionally not run
    Skipped,
}

/// Records assertion failures without aborting the verification.
#[derive(Debug, Default)]
pub struct Checker {
    failures: Vec<String>,
}

impl Checker {
    /// Create a checker without failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure with the given message if `condition` is false.
    pub fn check<M: FnOnce() -> String>(&mut self, condition: bool, message: M) -> bool {
        if !condition {
            self.failures.push(message());
        }

        condition
    }

    /// The failures recorded so far
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    fn into_failures(self) -> Vec<String> {
        self.failures
    }
}

/// A step of a [TestSuite].
pub trait TestCase<C> {
    /// Name of the case, used in the report
    fn name(&self) -> &str;

    /// Act on the context, an error fails the case and its verification is not run.
    fn execute(&self, _context: &mut C) -> StdResult<()> {
        Ok(())
    }

    /// Assert on the context.
    fn verify(&self, _context: &C, _checker: &mut Checker) -> Verification {
        Verification::Checked
    }
}

/// Outcome of a [TestCase].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    /// No failure
    Passed,

    /// At least one failure
    Failed,

    /// Verification was skipped
    Skipped,
}

impl Display for CaseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseStatus::Passed => write!(f, "PASS"),
            CaseStatus::Failed => write!(f, "FAIL"),
            CaseStatus::Skipped => write!(f, "SKIP"),
        }
    }
}

/// Report of a single [TestCase].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    /// Name of the case
    pub name: String,

    /// Outcome of the case
    pub status: CaseStatus,

    /// Messages of the failed assertions
    pub failures: Vec<String>,
}

/// Report of a [TestSuite] run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteReport {
    /// Name of the suite
    pub suite: String,

    /// Reports of the cases, in run order
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    fn count(&self, status: CaseStatus) -> usize {
        self.cases.iter().filter(|c| c.status == status).count()
    }

    /// Number of passed cases
    pub fn passed(&self) -> usize {
        self.count(CaseStatus::Passed)
    }

    /// Number of failed cases
    pub fn failed(&self) -> usize {
        self.count(CaseStatus::Failed)
    }

    /// Number of skipped cases
    pub fn skipped(&self) -> usize {
        self.count(CaseStatus::Skipped)
    }

    /// `true` if no case failed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

impl Display for SuiteReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Suite {}", self.suite)?;
        for case in &self.cases {
            writeln!(f, "  [{}] {}", case.status, case.name)?;
            for failure in &case.failures {
                writeln!(f, "        {failure}")?;
            }
        }
        writeln!(
            f,
            "{} passed, {} failed, {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }
}

/// An ordered list of [TestCase] sharing a context.
pub struct TestSuite<'a, C> {
    name: String,
    cases: Vec<Box<dyn TestCase<C> + 'a>>,
    logger: Logger,
}

impl<'a, C> TestSuite<'a, C> {
    /// Create an empty suite.
    pub fn new(name: &str, logger: Logger) -> Self {
        Self {
            name: name.to_string(),
            cases: vec![],
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    /// Append a case to the suite.
    pub fn with_case<T: TestCase<C> + 'a>(mut self, case: T) -> Self {
        self.cases.push(Box::new(case));
        self
    }

    /// Run every case in order.
    pub fn run(&self, context: &mut C) -> SuiteReport {
        info!(self.logger, "Running suite"; "suite" => &self.name, "cases" => self.cases.len());
        let cases = self
            .cases
            .iter()
            .map(|case| self.run_case(case.as_ref(), context))
            .collect();

        SuiteReport {
            suite: self.name.clone(),
            cases,
        }
    }

    fn run_case(&self, case: &dyn TestCase<C>, context: &mut C) -> CaseReport {
        debug!(self.logger, "Running case"; "case" => case.name());
        let (status, failures) = match case.execute(context) {
            Err(error) => (CaseStatus::Failed, vec![format!("{error:?}")]),
            Ok(()) => {
                let mut checker = Checker::new();
                match case.verify(context, &mut checker) {
                    Verification::Skipped => (CaseStatus::Skipped, vec![]),
                    Verification::Checked if checker.failures().is_empty() => {
                        (CaseStatus::Passed, vec![])
                    }
                    Verification::Checked => (CaseStatus::Failed, checker.into_failures()),
                }
            }
        };

        if status == CaseStatus::Failed {
            warn!(self.logger, "Case failed"; "case" => case.name(), "failures" => failures.len());
        }

        CaseReport {
            name: case.name().to_string(),
            status,
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use crate::test_utils::TestLogger;

    use super::*;

    struct Increment;

    impl TestCase<Vec<i32>> for Increment {
        fn name(&self) -> &str {
            "increment"
        }

        fn execute(&self, context: &mut Vec<i32>) -> StdResult<()> {
            context.iter_mut().for_each(|v| *v += 1);
            Ok(())
        }
    }

    struct AllPositive;

    impl TestCase<Vec<i32>> for AllPositive {
        fn name(&self) -> &str {
            "all_positive"
        }

        fn verify(&self, context: &Vec<i32>, checker: &mut Checker) -> Verification {
            for (i, v) in context.iter().enumerate() {
                checker.check(*v > 0, || format!("value {i} is {v}"));
            }
            Verification::Checked
        }
    }

    struct Skip;

    impl TestCase<Vec<i32>> for Skip {
        fn name(&self) -> &str {
            "skip"
        }

        fn verify(&self, _context: &Vec<i32>, checker: &mut Checker) -> Verification {
            checker.check(false, || "never reported".to_string());
            Verification::Skipped
        }
    }

    struct Broken;

    impl TestCase<Vec<i32>> for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn execute(&self, _context: &mut Vec<i32>) -> StdResult<()> {
            Err(anyhow!("kernel exploded"))
        }

        fn verify(&self, _context: &Vec<i32>, _checker: &mut Checker) -> Verification {
            panic!("verify must not run after a failed execute");
        }
    }

    #[test]
    fn run_cases_in_order_on_the_shared_context() {
        let suite = TestSuite::new("ordered", TestLogger::stdout())
            .with_case(Increment)
            .with_case(AllPositive);
        let mut context = vec![0, 1, 2];

        let report = suite.run(&mut context);

        assert_eq!(vec![1, 2, 3], context);
        assert_eq!(2, report.passed());
        assert!(report.is_success());
    }

    #[test]
    fn failed_assertions_are_all_recorded_and_the_run_continues() {
        let suite = TestSuite::new("failing", TestLogger::stdout())
            .with_case(AllPositive)
            .with_case(Increment)
            .with_case(AllPositive);
        let mut context = vec![-1, 0, 5];

        let report = suite.run(&mut context);

        assert_eq!(
            CaseReport {
                name: "all_positive".to_string(),
                status: CaseStatus::Failed,
                failures: vec!["value 0 is -1".to_string(), "value 1 is 0".to_string()],
            },
            report.cases[0]
        );
        assert_eq!(CaseStatus::Passed, report.cases[1].status);
        assert_eq!(
            vec!["value 0 is 0".to_string()],
            report.cases[2].failures
        );
        assert_eq!(2, report.failed());
        assert!(!report.is_success());
    }

    #[test]
    fn skipped_verification_is_neither_a_pass_nor_a_failure() {
        let suite = TestSuite::new("skipping", TestLogger::stdout()).with_case(Skip);

        let report = suite.run(&mut Vec::<i32>::new());

        assert_eq!(CaseStatus::Skipped, report.cases[0].status);
        assert!(report.cases[0].failures.is_empty());
        assert_eq!(1, report.skipped());
        assert!(report.is_success());
    }

    #[test]
    fn execute_error_fails_the_case_without_verifying() {
        let suite = TestSuite::new("broken", TestLogger::stdout()).with_case(Broken);

        let report = suite.run(&mut Vec::<i32>::new());

        assert_eq!(CaseStatus::Failed, report.cases[0].status);
        assert!(report.cases[0].failures[0].contains("kernel exploded"));
    }

    #[test]
    fn report_display_lists_cases_and_totals() {
        let report = SuiteReport {
            suite: "add_f32_suite".to_string(),
            cases: vec![
                CaseReport {
                    name: "against_gold".to_string(),
                    status: CaseStatus::Failed,
                    failures: vec!["add_f32(1, 2): 4 != 3".to_string()],
                },
                CaseReport {
                    name: "against_ref".to_string(),
                    status: CaseStatus::Passed,
                    failures: vec![],
                },
            ],
        };

        assert_eq!(
            "Suite add_f32_suite\n  [FAIL] against_gold\n        add_f32(1, 2): 4 != 3\n  \
             [PASS] against_ref\n1 passed, 1 failed, 0 skipped\n",
            report.to_string()
        );
    }

    #[test]
    fn report_serializes_status_in_lowercase() {
        let report = SuiteReport {
            suite: "sum_f32_print_gold_suite".to_string(),
            cases: vec![CaseReport {
                name: "against_gold".to_string(),
                status: CaseStatus::Skipped,
                failures: vec![],
            }],
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            serde_json::json!({
                "suite": "sum_f32_print_gold_suite",
                "cases": [{"name": "against_gold", "status": "skipped", "failures": []}]
            }),
            json
        );
    }
}
