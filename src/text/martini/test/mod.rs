//! Tests for martini glass renderers

use super::code::{available_variants, glass_slick, render_glass, MAX_GLASS_SIZE};

/// Verify all variants render byte-identical glasses to the slick reference
pub fn verify_all() -> Result<(), String> {
    for size in -2..=12 {
        let expected = render_glass(glass_slick, size);

        for variant in available_variants() {
            let actual = render_glass(variant.function, size);
            if actual != expected {
                return Err(format!(
                    "Variant '{}' failed for size {}: expected {:?}, got {:?}",
                    variant.name, size, expected, actual
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::martini::code::GlassMethod;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should render identical glasses");
    }

    #[test]
    fn test_size_one() {
        for variant in available_variants() {
            assert_eq!(
                render_glass(variant.function, 1).as_deref(),
                Some("0\n|\n=\n"),
                "{}: size 1",
                variant.name
            );
        }
    }

    #[test]
    fn test_size_three() {
        let expected = "00000\n 000\n  0\n  |\n  |\n  |\n=====\n";
        for variant in available_variants() {
            assert_eq!(
                render_glass(variant.function, 3).as_deref(),
                Some(expected),
                "{}: size 3",
                variant.name
            );
        }
    }

    #[test]
    fn test_non_positive_sizes_write_nothing() {
        for variant in available_variants() {
            for size in [0, -1, i32::MIN] {
                let mut buf = Vec::new();
                let rendered = (variant.function)(size, &mut buf).unwrap();
                assert!(!rendered, "{}: size {} should fail", variant.name, size);
                assert!(buf.is_empty(), "{}: size {} wrote output", variant.name, size);
            }
        }
    }

    #[test]
    fn test_oversized_glasses_write_nothing() {
        for variant in available_variants() {
            for size in [MAX_GLASS_SIZE + 1, 2_000_000_000, i32::MAX] {
                let mut buf = Vec::new();
                let rendered = (variant.function)(size, &mut buf).unwrap();
                assert!(!rendered, "{}: size {} should fail", variant.name, size);
                assert!(buf.is_empty(), "{}: size {} wrote output", variant.name, size);
            }
        }
    }

    #[test]
    fn test_largest_glass_renders() {
        let expected = render_glass(glass_slick, MAX_GLASS_SIZE).unwrap();
        assert_eq!(expected.lines().count(), 2 * MAX_GLASS_SIZE as usize + 1);
        assert_eq!(
            expected.lines().last().map(str::len),
            Some(2 * MAX_GLASS_SIZE as usize - 1)
        );
        for variant in available_variants() {
            assert_eq!(
                render_glass(variant.function, MAX_GLASS_SIZE).as_deref(),
                Some(expected.as_str()),
                "{}: largest size",
                variant.name
            );
        }
    }

    #[test]
    fn test_larger_sizes_match() {
        let variants = available_variants();
        for size in 13..=40 {
            let expected = render_glass(glass_slick, size).unwrap();
            assert_eq!(expected.lines().count(), 2 * size as usize + 1);
            for variant in &variants {
                assert_eq!(
                    render_glass(variant.function, size).as_deref(),
                    Some(expected.as_str()),
                    "{}: size {}",
                    variant.name,
                    size
                );
            }
        }
    }

    #[test]
    fn test_performant_always_resolves_to_concrete() {
        assert_eq!(GlassMethod::Performant.resolve(GlassMethod::Basic), GlassMethod::Basic);
        assert_eq!(
            GlassMethod::Performant.resolve(GlassMethod::Performant),
            GlassMethod::DEFAULT_PERFORMANT
        );
        assert_eq!(GlassMethod::Modified.resolve(GlassMethod::Basic), GlassMethod::Modified);
        assert_eq!(
            render_glass(GlassMethod::Performant.function(), 4),
            render_glass(glass_slick, 4)
        );
    }

    #[test]
    fn test_variant_names_round_trip() {
        for method in GlassMethod::ALL {
            assert_eq!(GlassMethod::from_name(method.name()), Some(method));
            assert_eq!(
                GlassMethod::from_name(&method.name().to_uppercase()),
                Some(method)
            );
        }
        assert_eq!(GlassMethod::from_name("bogus"), None);
    }
}
