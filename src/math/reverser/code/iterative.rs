/// Reverse the decimal digits of a non-negative integral value with a loop.
///
/// The loop body always runs at least once, so `0` reverses to `0`.
pub fn reverse_iterative(mut num: f64) -> f64 {
    let mut reversed = 0.0;

    loop {
        reversed = reversed * 10.0 + num % 10.0;
        num = (num / 10.0).floor();
        if num <= 0.0 {
            break;
        }
    }

    reversed
}
