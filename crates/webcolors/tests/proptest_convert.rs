//! Property-based tests for the format converters.
//!
//! Validates:
//! 1. Name → hex → name yields a name with the same value, for every table
//! 2. Hex → rgb → hex is the identity on normalized hex
//! 3. Integer → percent → integer is the identity on 0..=255
//! 4. The six exact percentages round-trip literally
//! 5. Out-of-range integers clamp instead of failing
//! 6. Name lookups ignore case

use proptest::prelude::*;

use webcolors::tables;
use webcolors::{
    IntegerRgb, PercentRgb, Specification, hex_to_name, hex_to_rgb, name_to_hex, name_to_rgb,
    rgb_percent_to_rgb, rgb_to_hex, rgb_to_name, rgb_to_rgb_percent,
};

// =============================================================================
// Strategies
// =============================================================================

fn arb_spec() -> impl Strategy<Value = Specification> {
    proptest::sample::select(Specification::ALL.to_vec())
}

fn arb_entry() -> impl Strategy<Value = (Specification, &'static str, &'static str)> {
    arb_spec().prop_flat_map(|spec| {
        let entries: Vec<_> = tables::entries(spec).collect();
        proptest::sample::select(entries).prop_map(move |(name, hex)| (spec, name, hex))
    })
}

fn arb_component() -> impl Strategy<Value = i64> {
    0_i64..=255
}

fn arb_hex() -> impl Strategy<Value = String> {
    "#[0-9a-f]{6}"
}

// =============================================================================
// Property: name → hex → name round-trips on value
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn name_hex_name_roundtrip((spec, name, hex) in arb_entry()) {
        let looked_up = name_to_hex(name, spec).unwrap();
        prop_assert_eq!(&looked_up, hex);

        let canonical = hex_to_name(&looked_up, spec).unwrap();
        prop_assert_eq!(name_to_hex(&canonical, spec).unwrap(), looked_up);
    }

    #[test]
    fn name_lookup_ignores_case((spec, name, _hex) in arb_entry()) {
        prop_assert_eq!(
            name_to_hex(&name.to_uppercase(), spec).unwrap(),
            name_to_hex(name, spec).unwrap()
        );
    }

    #[test]
    fn name_to_rgb_matches_hex((spec, name, hex) in arb_entry()) {
        prop_assert_eq!(name_to_rgb(name, spec).unwrap(), hex_to_rgb(hex).unwrap());
    }
}

// =============================================================================
// Property: hex ↔ rgb
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn hex_rgb_hex_roundtrip(hex in arb_hex()) {
        prop_assert_eq!(rgb_to_hex(hex_to_rgb(&hex).unwrap()), hex);
    }

    #[test]
    fn uppercase_hex_normalizes(hex in arb_hex()) {
        prop_assert_eq!(
            hex_to_rgb(&hex.to_uppercase()).unwrap(),
            hex_to_rgb(&hex).unwrap()
        );
    }

    #[test]
    fn rgb_hex_rgb_roundtrip(r in arb_component(), g in arb_component(), b in arb_component()) {
        let rgb = IntegerRgb::new(r, g, b);
        prop_assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
    }

    #[test]
    fn out_of_range_integers_clamp(r in any::<i64>(), g in any::<i64>(), b in any::<i64>()) {
        let hex = rgb_to_hex(IntegerRgb::new(r, g, b));
        let rgb = hex_to_rgb(&hex).unwrap();
        prop_assert_eq!(rgb, IntegerRgb::new(r.clamp(0, 255), g.clamp(0, 255), b.clamp(0, 255)));
    }
}

// =============================================================================
// Property: integer ↔ percent
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn rgb_percent_rgb_roundtrip(r in arb_component(), g in arb_component(), b in arb_component()) {
        let rgb = IntegerRgb::new(r, g, b);
        prop_assert_eq!(rgb_percent_to_rgb(&rgb_to_rgb_percent(rgb)).unwrap(), rgb);
    }

    #[test]
    fn percent_components_within_bounds(r in any::<i64>(), g in any::<i64>(), b in any::<i64>()) {
        let pct = rgb_to_rgb_percent(IntegerRgb::new(r, g, b));
        for component in pct.components() {
            let value: f64 = component.trim_end_matches('%').parse().unwrap();
            prop_assert!((0.0..=100.0).contains(&value), "{} out of range", component);
        }
    }

    #[test]
    fn percent_to_rgb_within_bounds(r in -500.0_f64..500.0, g in -500.0_f64..500.0, b in -500.0_f64..500.0) {
        let pct = PercentRgb::new(format!("{r:.3}%"), format!("{g:.3}%"), format!("{b:.3}%"));
        let rgb = rgb_percent_to_rgb(&pct).unwrap();
        for c in [rgb.red, rgb.green, rgb.blue] {
            prop_assert!((0..=255).contains(&c));
        }
    }
}

#[test]
fn exact_percentages_roundtrip() {
    let cases = [
        (0, "0%"),
        (16, "6.25%"),
        (32, "12.5%"),
        (64, "25%"),
        (128, "50%"),
        (255, "100%"),
    ];
    for (value, percent) in cases {
        let pct = rgb_to_rgb_percent(IntegerRgb::new(value, value, value));
        assert_eq!(pct, PercentRgb::new(percent, percent, percent));
        assert_eq!(
            rgb_percent_to_rgb(&pct).unwrap(),
            IntegerRgb::new(value, value, value)
        );
    }
}

#[test]
fn every_css3_name_resolves_to_a_css3_value() {
    for (name, hex) in tables::entries(Specification::Css3) {
        let rgb = hex_to_rgb(hex).unwrap();
        let canonical = rgb_to_name(rgb, Specification::Css3).unwrap();
        assert_eq!(
            name_to_hex(&canonical, Specification::Css3).unwrap(),
            hex,
            "{name} → {canonical}"
        );
    }
}
