//! Single precision numeric kernels.
//!
//! Every kernel reads `n` elements from its inputs and writes to `out`: `n` elements for
//! element-wise kernels, the first element only for reductions. `out` may be longer than what
//! the kernel is allowed to write.

fn map_unary(a: &[f32], out: &mut [f32], n: usize, f: impl Fn(f32) -> f32) {
    for (o, &x) in out[..n].iter_mut().zip(&a[..n]) {
        *o = f(x);
    }
}

fn map_binary(a: &[f32], b: &[f32], out: &mut [f32], n: usize, f: impl Fn(f32, f32) -> f32) {
    for ((o, &x), &y) in out[..n].iter_mut().zip(&a[..n]).zip(&b[..n]) {
        *o = f(x, y);
    }
}

/// Absolute value.
pub fn abs_f32(a: &[f32], out: &mut [f32], n: usize) {
    map_unary(a, out, n, f32::abs);
}

/// Square root.
pub fn sqrt_f32(a: &[f32], out: &mut [f32], n: usize) {
    map_unary(a, out, n, f32::sqrt);
}

/// Inverse square root, bit level approximation refined with one Newton step.
///
/// Relative error is below 0.2%.
pub fn invsqrt_f32(a: &[f32], out: &mut [f32], n: usize) {
    map_unary(a, out, n, |x| {
        let half = 0.5 * x;
        let y = f32::from_bits(0x5f37_59df_u32.wrapping_sub(x.to_bits() >> 1));

        y * (1.5 - half * y * y)
    });
}

/// Inverse.
pub fn inv_f32(a: &[f32], out: &mut [f32], n: usize) {
    map_unary(a, out, n, f32::recip);
}

/// Natural exponential.
pub fn exp_f32(a: &[f32], out: &mut [f32], n: usize) {
    map_unary(a, out, n, f32::exp);
}

/// Natural logarithm.
pub fn ln_f32(a: &[f32], out: &mut [f32], n: usize) {
    map_unary(a, out, n, f32::ln);
}

/// Sine.
pub fn sin_f32(a: &[f32], out: &mut [f32], n: usize) {
    map_unary(a, out, n, f32::sin);
}

/// Cosine.
pub fn cos_f32(a: &[f32], out: &mut [f32], n: usize) {
    map_unary(a, out, n, f32::cos);
}

/// Hyperbolic tangent.
pub fn tanh_f32(a: &[f32], out: &mut [f32], n: usize) {
    map_unary(a, out, n, f32::tanh);
}

/// Element-wise addition.
pub fn add_f32(a: &[f32], b: &[f32], out: &mut [f32], n: usize) {
    map_binary(a, b, out, n, |x, y| x + y);
}

/// Element-wise subtraction.
pub fn sub_f32(a: &[f32], b: &[f32], out: &mut [f32], n: usize) {
    map_binary(a, b, out, n, |x, y| x - y);
}

/// Element-wise multiplication.
pub fn mul_f32(a: &[f32], b: &[f32], out: &mut [f32], n: usize) {
    map_binary(a, b, out, n, |x, y| x * y);
}

/// Element-wise division.
pub fn div_f32(a: &[f32], b: &[f32], out: &mut [f32], n: usize) {
    map_binary(a, b, out, n, |x, y| x / y);
}

/// Four quadrant arc tangent of `a / b`.
pub fn atan2_f32(a: &[f32], b: &[f32], out: &mut [f32], n: usize) {
    map_binary(a, b, out, n, f32::atan2);
}

/// Sum of all the elements.
pub fn sum_f32(a: &[f32], out: &mut [f32], n: usize) {
    out[0] = a[..n].iter().sum();
}

/// Arithmetic mean of all the elements, `0` for an empty input.
pub fn mean_f32(a: &[f32], out: &mut [f32], n: usize) {
    out[0] = if n == 0 {
        0.0
    } else {
        a[..n].iter().sum::<f32>() / n as f32
    };
}

/// Largest element, `-inf` for an empty input.
pub fn max_f32(a: &[f32], out: &mut [f32], n: usize) {
    out[0] = a[..n].iter().copied().fold(f32::NEG_INFINITY, f32::max);
}

/// Smallest element, `+inf` for an empty input.
pub fn min_f32(a: &[f32], out: &mut [f32], n: usize) {
    out[0] = a[..n].iter().copied().fold(f32::INFINITY, f32::min);
}

/// Dot product.
pub fn dot_f32(a: &[f32], b: &[f32], out: &mut [f32], n: usize) {
    out[0] = a[..n].iter().zip(&b[..n]).map(|(x, y)| x * y).sum();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_wise_kernels_leave_slots_after_n_untouched() {
        let mut out = [0.0, 0.0, 7.0];

        abs_f32(&[-1.0, 2.0], &mut out, 2);
        assert_eq!([1.0, 2.0, 7.0], out);

        add_f32(&[1.0, 2.0], &[3.0, 4.0], &mut out, 2);
        assert_eq!([4.0, 6.0, 7.0], out);
    }

    #[test]
    fn reductions_only_write_the_first_slot() {
        let mut out = [0.0, 7.0];

        sum_f32(&[1.0, 2.0, 3.0], &mut out, 3);
        assert_eq!([6.0, 7.0], out);

        dot_f32(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &mut out, 3);
        assert_eq!([32.0, 7.0], out);

        max_f32(&[1.0, -2.0, 3.0], &mut out, 3);
        assert_eq!([3.0, 7.0], out);

        min_f32(&[1.0, -2.0, 3.0], &mut out, 3);
        assert_eq!([-2.0, 7.0], out);
    }

    #[test]
    fn mean_of_empty_input_is_zero() {
        let mut out = [1.0];

        mean_f32(&[], &mut out, 0);

        assert_eq!([0.0], out);
    }

    #[test]
    fn invsqrt_approximation_stays_within_its_error_bound() {
        let inputs = [0.01, 0.5, 1.0, 2.0, 10.0, 12345.678, 1.0e6];
        let mut out = [0.0; 7];

        invsqrt_f32(&inputs, &mut out, inputs.len());

        for (x, y) in inputs.iter().zip(out) {
            let exact = 1.0 / f64::from(*x).sqrt();
            let error = ((f64::from(y) - exact) / exact).abs();
            assert!(error < 0.002, "invsqrt({x}) = {y}, relative error {error}");
        }
    }
}
