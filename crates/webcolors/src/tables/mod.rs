//! Named-color tables and their reverse mappings.
//!
//! The forward tables map a lowercase name to a normalized `#rrggbb` value.
//! The reverse tables are derived by inverting the forward tables in source
//! order, so when several names share a value the last one listed wins.
//! Values with a preferred spelling are then pinned explicitly; the result
//! never depends on hash iteration order.
//!
//! All maps are built on first use and never mutated afterwards.

mod color_hexa;
mod css;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::specification::Specification;

type NameTable = HashMap<String, &'static str>;
type HexTable = HashMap<&'static str, &'static str>;

static HTML4_NAMES_TO_HEX: LazyLock<NameTable> = LazyLock::new(|| forward(css::HTML4));

static CSS21_NAMES_TO_HEX: LazyLock<NameTable> =
    LazyLock::new(|| forward(css21_entries().into_iter()));

static CSS3_NAMES_TO_HEX: LazyLock<NameTable> = LazyLock::new(|| forward(css::CSS3));

static COLOR_HEXA_NAMES_TO_HEX: LazyLock<NameTable> =
    LazyLock::new(|| forward(color_hexa::COLOR_HEXA));

static HTML4_HEX_TO_NAMES: LazyLock<HexTable> = LazyLock::new(|| reverse(css::HTML4, &[]));

static CSS21_HEX_TO_NAMES: LazyLock<HexTable> =
    LazyLock::new(|| reverse(css21_entries().into_iter(), &[]));

static CSS3_HEX_TO_NAMES: LazyLock<HexTable> =
    LazyLock::new(|| reverse(css::CSS3, css::CSS3_REVERSE_PINS));

static COLOR_HEXA_HEX_TO_NAMES: LazyLock<HexTable> =
    LazyLock::new(|| reverse(color_hexa::COLOR_HEXA, &[]));

fn css21_entries() -> Vec<&'static (&'static str, &'static str)> {
    css::CSS21_ADDITIONS.iter().chain(css::HTML4).collect()
}

fn forward<'a, I>(entries: I) -> NameTable
where
    I: IntoIterator<Item = &'a (&'static str, &'static str)>,
{
    entries
        .into_iter()
        .map(|&(name, hex)| (name.to_lowercase(), hex))
        .collect()
}

fn reverse<'a, I>(entries: I, pins: &[(&'static str, &'static str)]) -> HexTable
where
    I: IntoIterator<Item = &'a (&'static str, &'static str)>,
{
    let mut table: HexTable = entries.into_iter().map(|&(name, hex)| (hex, name)).collect();
    for &(hex, name) in pins {
        table.insert(hex, name);
    }
    table
}

/// Forward table (lowercase name → hex) for `spec`.
#[must_use]
pub fn names_to_hex(spec: Specification) -> &'static HashMap<String, &'static str> {
    match spec {
        Specification::Html4 | Specification::Css2 => &HTML4_NAMES_TO_HEX,
        Specification::Css21 => &CSS21_NAMES_TO_HEX,
        Specification::Css3 => &CSS3_NAMES_TO_HEX,
        Specification::ColorHexa => &COLOR_HEXA_NAMES_TO_HEX,
    }
}

/// Reverse table (hex → canonical name) for `spec`.
#[must_use]
pub fn hex_to_names(spec: Specification) -> &'static HashMap<&'static str, &'static str> {
    match spec {
        Specification::Html4 | Specification::Css2 => &HTML4_HEX_TO_NAMES,
        Specification::Css21 => &CSS21_HEX_TO_NAMES,
        Specification::Css3 => &CSS3_HEX_TO_NAMES,
        Specification::ColorHexa => &COLOR_HEXA_HEX_TO_NAMES,
    }
}

/// Every `(name, hex)` entry of `spec` in source order.
///
/// Names are returned as listed, which for [`Specification::ColorHexa`]
/// means their mixed-case display form.
pub fn entries(spec: Specification) -> impl Iterator<Item = (&'static str, &'static str)> {
    let (head, tail): (&'static [(&str, &str)], &'static [(&str, &str)]) = match spec {
        Specification::Html4 | Specification::Css2 => (&[], css::HTML4),
        Specification::Css21 => (css::CSS21_ADDITIONS, css::HTML4),
        Specification::Css3 => (&[], css::CSS3),
        Specification::ColorHexa => (&[], color_hexa::COLOR_HEXA),
    };
    head.iter().chain(tail).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(names_to_hex(Specification::Html4).len(), 16);
        assert_eq!(names_to_hex(Specification::Css2).len(), 16);
        assert_eq!(names_to_hex(Specification::Css21).len(), 17);
        assert_eq!(names_to_hex(Specification::Css3).len(), 147);
        assert_eq!(names_to_hex(Specification::ColorHexa).len(), 864);
    }

    #[test]
    fn css2_shares_html4_tables() {
        assert!(std::ptr::eq(
            names_to_hex(Specification::Css2),
            names_to_hex(Specification::Html4)
        ));
        assert!(std::ptr::eq(
            hex_to_names(Specification::Css2),
            hex_to_names(Specification::Html4)
        ));
    }

    #[test]
    fn css21_adds_orange() {
        let css21 = names_to_hex(Specification::Css21);
        assert_eq!(css21.get("orange"), Some(&"#ffa500"));
        assert!(!names_to_hex(Specification::Html4).contains_key("orange"));
        for (name, hex) in names_to_hex(Specification::Html4) {
            assert_eq!(css21.get(name), Some(hex));
        }
    }

    #[test]
    fn css3_gray_family_pinned() {
        let reverse = hex_to_names(Specification::Css3);
        for &(hex, name) in css::CSS3_REVERSE_PINS {
            assert_eq!(reverse.get(hex), Some(&name));
            assert!(name.contains("gray"));
        }
    }

    #[test]
    fn css3_unpinned_aliases_resolve_to_last_listed() {
        let reverse = hex_to_names(Specification::Css3);
        assert_eq!(reverse.get("#00ffff"), Some(&"cyan"));
        assert_eq!(reverse.get("#ff00ff"), Some(&"magenta"));
    }

    #[test]
    fn color_hexa_keys_are_lowercase_and_reverse_keeps_display_names() {
        let forward = names_to_hex(Specification::ColorHexa);
        assert_eq!(forward.get("alice blue"), Some(&"#f0f8ff"));
        assert!(forward.get("Alice Blue").is_none());
        assert_eq!(forward.get("café au lait"), Some(&"#a67b5b"));

        let reverse = hex_to_names(Specification::ColorHexa);
        assert_eq!(reverse.get("#f0f8ff"), Some(&"Alice Blue"));
        assert_eq!(reverse.get("#a9a9a9"), Some(&"Dark Gray"));
    }

    #[test]
    fn every_value_is_normalized_hex() {
        for spec in Specification::ALL {
            for (name, hex) in entries(spec) {
                assert_eq!(hex.len(), 7, "{name} in {spec}");
                assert!(hex.starts_with('#'));
                assert!(
                    hex[1..]
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                    "{name} in {spec} has non-normalized value {hex}"
                );
            }
        }
    }

    #[test]
    fn every_reverse_entry_points_back() {
        for spec in Specification::ALL {
            let forward = names_to_hex(spec);
            for (hex, name) in hex_to_names(spec) {
                assert_eq!(forward.get(&name.to_lowercase()), Some(hex), "{spec}");
            }
        }
    }

    #[test]
    fn entries_follow_source_order() {
        let first: Vec<_> = entries(Specification::Css21).take(2).collect();
        assert_eq!(first, vec![("orange", "#ffa500"), ("aqua", "#00ffff")]);
        assert_eq!(entries(Specification::Css3).count(), 147);
    }
}
