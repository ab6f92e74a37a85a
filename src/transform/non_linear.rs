//! Non-linear transform utilities.

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`.
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Map `x` from `[in_start, in_end]` onto `[out_start, out_end]`, clamping on both sides.
///
/// A degenerate input range maps everything to `out_end`.
pub fn interpolate_clamped(x: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let span = input[1] - input[0];
    if span == 0.0 {
        return output[1];
    }
    let t = clamp01((x - input[0]) / span);
    output[0] + (output[1] - output[0]) * t
}

#[cfg(test)]
#[path = "../../tests/unit/transform/non_linear.rs"]
mod tests;
