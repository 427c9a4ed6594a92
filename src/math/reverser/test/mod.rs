//! Tests for digit reversal implementations

use super::code::{available_variants, reverse_iterative};
use rand::Rng;

/// Largest value whose digits (and reversed digits) are exact in an `f64`
const EXACT_LIMIT: u64 = 999_999_999_999_999;

/// Verify all variants produce the same results as the iterative reference
pub fn verify_all() -> Result<(), String> {
    let mut values: Vec<f64> = vec![
        0.0, 1.0, 7.0, 9.0, 10.0, 100.0, 101.0, 1200.0, 12345.0, 90_817_263.0,
    ];
    let mut rng = rand::rng();
    values.extend((0..64).map(|_| rng.random_range(0..=EXACT_LIMIT) as f64));

    for variant in available_variants() {
        for &value in &values {
            let expected = reverse_iterative(value);
            let actual = (variant.function)(value);

            if actual != expected {
                return Err(format!(
                    "Variant '{}' failed for value {}: expected {}, got {}",
                    variant.name, value, expected, actual
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_known_values() {
        for variant in available_variants() {
            let reverse = variant.function;
            assert_eq!(reverse(0.0), 0.0, "{}: reverse(0)", variant.name);
            assert_eq!(reverse(7.0), 7.0, "{}: reverse(7)", variant.name);
            assert_eq!(reverse(12345.0), 54321.0, "{}: reverse(12345)", variant.name);
            assert_eq!(reverse(1200.0), 21.0, "{}: reverse(1200)", variant.name);
        }
    }

    #[test]
    fn test_trailing_zeros_are_dropped() {
        // reversal is not an involution once trailing zeros are involved
        for variant in available_variants() {
            let reverse = variant.function;
            assert_eq!(reverse(100.0), 1.0, "{}: reverse(100)", variant.name);
            assert_eq!(reverse(reverse(100.0)), 1.0, "{}: reverse(reverse(100))", variant.name);
        }
    }

    #[test]
    fn test_double_reverse_is_identity_without_trailing_zero() {
        let mut rng = rand::rng();
        for variant in available_variants() {
            let reverse = variant.function;
            for _ in 0..500 {
                let n = rng.random_range(1..=EXACT_LIMIT);
                if n % 10 == 0 {
                    continue;
                }
                let n = n as f64;
                assert_eq!(reverse(reverse(n)), n, "{}: double reverse of {}", variant.name, n);
            }
        }
    }
}
