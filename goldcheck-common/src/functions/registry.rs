use std::collections::BTreeMap;
use thiserror::Error;

use crate::comparator::ToleranceComparator;
use crate::entities::GoldRecord;
use crate::functions::{FunctionUnderTest, gold_tables, kernels};
use crate::reference::{BinaryReference, ScalarReference, UnaryReference};

/// Errors raised by the [FunctionRegistry].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No function is registered under the requested name.
    #[error("Unknown function '{name}', available functions: {}", available.join(", "))]
    UnknownFunction {
        /// Requested name
        name: String,
        /// Names of the registered functions
        available: Vec<String>,
    },
}

/// Functions under test, indexed by name.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    functions: BTreeMap<String, FunctionUnderTest>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding all the kernels of [kernels].
    pub fn with_builtin_functions() -> Self {
        let mut registry = Self::new();
        for function in builtin_functions() {
            registry.register(function);
        }

        registry
    }

    /// Register a function, replacing any function registered under the same name.
    pub fn register(&mut self, function: FunctionUnderTest) {
        self.functions.insert(function.name().to_string(), function);
    }

    /// Names of the registered functions, sorted.
    pub fn names(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }

    /// Get a registered function.
    pub fn get(&self, name: &str) -> Result<&FunctionUnderTest, RegistryError> {
        self.functions
            .get(name)
            .ok_or_else(|| self.unknown_function(name))
    }

    /// Take a registered function out of the registry.
    pub fn take(&mut self, name: &str) -> Result<FunctionUnderTest, RegistryError> {
        match self.functions.remove(name) {
            Some(function) => Ok(function),
            None => Err(self.unknown_function(name)),
        }
    }

    fn unknown_function(&self, name: &str) -> RegistryError {
        RegistryError::UnknownFunction {
            name: name.to_string(),
            available: self.names(),
        }
    }
}

fn sum(records: &[GoldRecord]) -> f64 {
    records.iter().map(|r| f64::from(r.ai)).sum()
}

fn builtin_functions() -> Vec<FunctionUnderTest> {
    use FunctionUnderTest as F;

    vec![
        F::unary("abs_f32", kernels::abs_f32, gold_tables::ABS_F32)
            .with_reference(UnaryReference(f64::abs)),
        F::unary("sqrt_f32", kernels::sqrt_f32, gold_tables::SQRT_F32)
            .with_reference(UnaryReference(f64::sqrt)),
        F::unary("invsqrt_f32", kernels::invsqrt_f32, gold_tables::INVSQRT_F32)
            .with_reference(UnaryReference(|x| 1.0 / x.sqrt()))
            .with_comparator(ToleranceComparator::new(0.0001, 0.002)),
        F::unary("inv_f32", kernels::inv_f32, gold_tables::INV_F32)
            .with_reference(UnaryReference(f64::recip)),
        F::unary("exp_f32", kernels::exp_f32, gold_tables::EXP_F32)
            .with_reference(UnaryReference(f64::exp)),
        F::unary("ln_f32", kernels::ln_f32, gold_tables::LN_F32)
            .with_reference(UnaryReference(f64::ln)),
        F::unary("sin_f32", kernels::sin_f32, gold_tables::SIN_F32)
            .with_reference(UnaryReference(f64::sin)),
        F::unary("cos_f32", kernels::cos_f32, gold_tables::COS_F32)
            .with_reference(UnaryReference(f64::cos)),
        F::unary("tanh_f32", kernels::tanh_f32, gold_tables::TANH_F32)
            .with_reference(UnaryReference(f64::tanh)),
        F::binary("add_f32", kernels::add_f32, gold_tables::ADD_F32)
            .with_reference(BinaryReference(|a, b| a + b)),
        F::binary("sub_f32", kernels::sub_f32, gold_tables::SUB_F32)
            .with_reference(BinaryReference(|a, b| a - b)),
        F::binary("mul_f32", kernels::mul_f32, gold_tables::MUL_F32)
            .with_reference(BinaryReference(|a, b| a * b)),
        F::binary("div_f32", kernels::div_f32, gold_tables::DIV_F32)
            .with_reference(BinaryReference(|a, b| a / b)),
        F::binary("atan2_f32", kernels::atan2_f32, gold_tables::ATAN2_F32)
            .with_reference(BinaryReference(f64::atan2)),
        F::unary("sum_f32", kernels::sum_f32, gold_tables::SUM_F32)
            .with_scalar_output()
            .with_reference(ScalarReference(sum)),
        F::unary("mean_f32", kernels::mean_f32, gold_tables::MEAN_F32)
            .with_scalar_output()
            .with_reference(ScalarReference(|records| {
                if records.is_empty() {
                    0.0
                } else {
                    sum(records) / records.len() as f64
                }
            })),
        F::unary("max_f32", kernels::max_f32, gold_tables::MAX_F32)
            .with_scalar_output()
            .with_reference(ScalarReference(|records| {
                records
                    .iter()
                    .map(|r| f64::from(r.ai))
                    .fold(f64::NEG_INFINITY, f64::max)
            })),
        F::unary("min_f32", kernels::min_f32, gold_tables::MIN_F32)
            .with_scalar_output()
            .with_reference(ScalarReference(|records| {
                records
                    .iter()
                    .map(|r| f64::from(r.ai))
                    .fold(f64::INFINITY, f64::min)
            })),
        F::binary("dot_f32", kernels::dot_f32, gold_tables::DOT_F32)
            .with_scalar_output()
            .with_reference(ScalarReference(|records| {
                records
                    .iter()
                    .map(|r| f64::from(r.ai) * f64::from(r.bi))
                    .sum()
            })),
    ]
}
