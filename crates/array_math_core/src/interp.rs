//! Range interpolation used by the modifier calculator.

/// Normalized progress of `input` across the `from..to` range, clamped to `[0, 1]`.
///
/// A zero-width range (`from == to`) is a step: `0` below `from`, `1` at or above it.
/// Inverted ranges (`from > to`) are allowed and ramp downwards.
///
/// ```
/// use array_math_core::interp::interpolate_scalar;
///
/// assert_eq!(interpolate_scalar(0.0, 10.0, 5.0), 0.5);
/// assert_eq!(interpolate_scalar(10.0, 0.0, 2.5), 0.75);
/// assert_eq!(interpolate_scalar(3.0, 3.0, 2.9), 0.0);
/// ```
pub fn interpolate_scalar(from: f32, to: f32, input: f32) -> f32 {
    if to == from {
        return if input < from { 0.0 } else { 1.0 };
    }

    let progress = (input - from) / (to - from);

    // NaN progress lands on 0.
    progress.max(0.0).min(1.0)
}
