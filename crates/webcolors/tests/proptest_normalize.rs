//! Property-based tests for the value normalizers.
//!
//! Validates:
//! 1. normalize_hex output is always `#` + six lowercase hex digits
//! 2. normalize_hex is idempotent
//! 3. Three-digit shorthand duplicates every digit
//! 4. Strings outside the hex pattern are rejected
//! 5. Integer triplets clamp component-wise
//! 6. Percentage triplets clamp and keep integer/float form
//! 7. Percentage normalization is idempotent and its output always converts

use proptest::prelude::*;

use webcolors::{
    Error, IntegerRgb, PercentRgb, normalize_hex, normalize_integer_triplet,
    normalize_percent_triplet, rgb_percent_to_rgb,
};

fn arb_hex_input() -> impl Strategy<Value = String> {
    prop_oneof!["#[0-9a-fA-F]{3}", "#[0-9a-fA-F]{6}"]
}

/// A float percentage rendered in fixed notation with 0-12 decimals, or in
/// exponent notation.
fn arb_float_percent() -> impl Strategy<Value = String> {
    prop_oneof![
        (0.0_f64..100.0, 0_usize..=12).prop_map(|(v, precision)| format!("{v:.precision$}%")),
        (0.0_f64..100.0).prop_map(|v| format!("{v:e}%")),
        (1_u32..10, 1_i32..=12).prop_map(|(d, exp)| format!("0.{}{d}%", "0".repeat(exp as usize))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn hex_output_is_canonical(hex in arb_hex_input()) {
        let normalized = normalize_hex(&hex).unwrap();
        prop_assert_eq!(normalized.len(), 7);
        prop_assert!(normalized.starts_with('#'));
        prop_assert!(normalized[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn hex_normalization_idempotent(hex in arb_hex_input()) {
        let once = normalize_hex(&hex).unwrap();
        prop_assert_eq!(normalize_hex(&once).unwrap(), once);
    }

    #[test]
    fn shorthand_duplicates_digits(digits in "[0-9a-f]{3}") {
        let normalized = normalize_hex(&format!("#{digits}")).unwrap();
        let expected: String = digits.chars().flat_map(|c| [c, c]).collect();
        prop_assert_eq!(normalized, format!("#{expected}"));
    }

    #[test]
    fn malformed_hex_rejected(s in "\\PC{0,10}") {
        let valid = s.starts_with('#')
            && (s.len() == 4 || s.len() == 7)
            && s[1..].chars().all(|c| c.is_ascii_hexdigit());
        prop_assume!(!valid);
        prop_assert_eq!(normalize_hex(&s), Err(Error::InvalidFormat { value: s.clone() }));
    }

    #[test]
    fn integer_triplet_clamped(r in any::<i64>(), g in any::<i64>(), b in any::<i64>()) {
        let normalized = normalize_integer_triplet(IntegerRgb::new(r, g, b));
        prop_assert_eq!(normalized, IntegerRgb::new(r.clamp(0, 255), g.clamp(0, 255), b.clamp(0, 255)));
    }

    #[test]
    fn integer_percent_clamped(r in -1000_i64..1000, g in -1000_i64..1000, b in -1000_i64..1000) {
        let normalized = normalize_percent_triplet(&PercentRgb::new(
            format!("{r}%"),
            format!("{g}%"),
            format!("{b}%"),
        ))
        .unwrap();
        prop_assert_eq!(normalized, PercentRgb::new(
            format!("{}%", r.clamp(0, 100)),
            format!("{}%", g.clamp(0, 100)),
            format!("{}%", b.clamp(0, 100)),
        ));
    }

    #[test]
    fn float_percent_keeps_fraction_in_range(whole in 0_u32..100, frac in 1_u32..10) {
        let input = format!("{whole}.{frac}%");
        let normalized = normalize_percent_triplet(&PercentRgb::new(input.clone(), "0%", "0%")).unwrap();
        prop_assert_eq!(normalized.red, input);
    }

    #[test]
    fn percent_normalization_idempotent(
        r in arb_float_percent(),
        g in arb_float_percent(),
        b in arb_float_percent(),
    ) {
        let once = normalize_percent_triplet(&PercentRgb::new(r, g, b)).unwrap();
        prop_assert_eq!(normalize_percent_triplet(&once).unwrap(), once.clone());

        let rgb = rgb_percent_to_rgb(&once);
        prop_assert!(rgb.is_ok(), "{:?} did not convert: {:?}", once, rgb);
        let rgb = rgb.unwrap();
        for component in [rgb.red, rgb.green, rgb.blue] {
            prop_assert!((0..=255).contains(&component));
        }
    }
}
