/// Reverse the decimal digits of a non-negative integral value by recursion.
///
/// Depth is bounded by the digit count (at most 309 for a finite `f64`).
pub fn reverse_recursive(num: f64) -> f64 {
    accumulate(num, 0.0)
}

fn accumulate(num: f64, reversed: f64) -> f64 {
    let reversed = reversed * 10.0 + num % 10.0;
    let num = (num / 10.0).floor();

    if num > 0.0 {
        accumulate(num, reversed)
    } else {
        reversed
    }
}
