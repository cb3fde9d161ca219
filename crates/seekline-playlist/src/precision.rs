//! Floating-point margin for summed segment durations.

/// Round `value` up by one unit in its least significant decimal digit.
///
/// Integers gain a whole second (`10.0` becomes `11.0`); `9.5` becomes `9.6`
/// and `2.345` becomes `2.346`. The result is always larger than the input,
/// which keeps drift from summing many declared durations from landing a
/// lookup one segment early.
///
/// The decimal scale comes from the shortest representation that round-trips
/// `value`. Non-finite input is returned unchanged.
pub fn ceil_least_significant_digit(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if value.fract() == 0.0 {
        return value + 1.0;
    }

    let repr = value.to_string();
    let digits = repr
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len()) as i32;

    // Stop at the first scale that lands on an integer, or at the last digit.
    let exponent = (1..digits)
        .find(|&i| (value * 10f64.powi(i)).fract() == 0.0)
        .unwrap_or(digits);
    let scale = 10f64.powi(exponent);

    (value * scale + 1.0) / scale
}
