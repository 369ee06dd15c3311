//! Fixed-vector conformance tests for the HTML5 color algorithms.
//!
//! Every expected triplet below was produced by the reference step-by-step
//! algorithm; a mismatch means a step was reordered or merged.

use webcolors::{
    Error, Html5SimpleColor, html5_parse_legacy_color, html5_parse_simple_color,
    html5_serialize_simple_color,
};

const LEGACY_VECTORS: &[(&str, (u8, u8, u8))] = &[
    // Keywords and exact hex
    ("#000000", (0, 0, 0)),
    ("#FFFFFF", (255, 255, 255)),
    ("white", (255, 255, 255)),
    ("WhiteSmoke", (245, 245, 245)),
    ("grey", (128, 128, 128)),
    ("  red  ", (255, 0, 0)),
    ("#ABCDEF", (171, 205, 239)),
    ("ff0000", (255, 0, 0)),
    // #rgb shorthand
    ("#abc", (170, 187, 204)),
    ("#0F0", (0, 255, 0)),
    ("#0f0 ", (0, 255, 0)),
    ("\t\n#abc\r\n", (170, 187, 204)),
    // Padding to a multiple of three
    ("#ff000", (255, 0, 0)),
    ("#abcde", (171, 205, 224)),
    ("f00 ", (15, 0, 0)),
    ("#ff00000", (255, 0, 0)),
    // Non-hex characters replaced by zero
    ("#-1-2-3", (1, 2, 3)),
    ("#a b c", (160, 176, 192)),
    ("fire", (240, 14, 0)),
    ("navy blue", (160, 11, 14)),
    ("burnt sienna", (176, 0, 224)),
    ("transparently", (10, 160, 0)),
    ("chucknorris", (192, 0, 0)),
    ("#123é", (18, 48, 0)),
    ("ééé", (0, 0, 0)),
    ("#fff\u{0}", (255, 240, 0)),
    // Characters outside the BMP become "00"
    ("#\u{10000}abc", (0, 171, 192)),
    ("a\u{1F600}b\u{1F600}c", (160, 176, 192)),
    // Component length handling
    ("12345678", (18, 69, 120)),
    ("123456789", (18, 69, 120)),
    ("abcdefabcdefabcdefabcdef", (171, 205, 239)),
    ("#0000001", (0, 0, 16)),
    ("000000000000000000000000111", (0, 0, 17)),
];

#[test]
fn legacy_vectors() {
    for &(input, (red, green, blue)) in LEGACY_VECTORS {
        assert_eq!(
            html5_parse_legacy_color(input).unwrap(),
            Html5SimpleColor::new(red, green, blue),
            "input {input:?}"
        );
    }
}

#[test]
fn legacy_hash_position_after_truncation() {
    // A trailing '#' beyond position 128 is cut before the prefix check.
    let trailing = format!("{}#", "1".repeat(127));
    assert_eq!(
        html5_parse_legacy_color(&trailing).unwrap(),
        Html5SimpleColor::new(17, 17, 17)
    );

    let leading = format!("#{}", "1".repeat(127));
    assert_eq!(
        html5_parse_legacy_color(&leading).unwrap(),
        Html5SimpleColor::new(17, 17, 17)
    );
}

#[test]
fn legacy_astral_expansion_counts_toward_truncation() {
    // 64 astral characters expand to 128 zeros; the digits that follow are
    // dropped by truncation.
    let input = format!("{}fff", "\u{1F600}".repeat(64));
    assert_eq!(
        html5_parse_legacy_color(&input).unwrap(),
        Html5SimpleColor::new(0, 0, 0)
    );
}

#[test]
fn legacy_errors() {
    assert_eq!(html5_parse_legacy_color(""), Err(Error::EmptyInput));
    assert_eq!(
        html5_parse_legacy_color("transparent"),
        Err(Error::TransparentNotAllowed)
    );
    assert_eq!(
        html5_parse_legacy_color("\n TRANSPARENT \n"),
        Err(Error::TransparentNotAllowed)
    );
}

#[test]
fn simple_color_preconditions_checked_in_order() {
    // Length is checked before the prefix, the prefix before the digits.
    assert_eq!(
        html5_parse_simple_color("123456"),
        Err(Error::InvalidLength { length: 6 })
    );
    assert_eq!(
        html5_parse_simple_color("1234567"),
        Err(Error::MissingHashPrefix)
    );
    assert!(matches!(
        html5_parse_simple_color("#12345g"),
        Err(Error::InvalidHexDigits { .. })
    ));
    assert_eq!(
        html5_parse_simple_color("#1234"),
        Err(Error::InvalidLength { length: 5 })
    );
}

#[test]
fn simple_color_is_case_insensitive() {
    assert_eq!(
        html5_parse_simple_color("#AbCdEf").unwrap(),
        html5_parse_simple_color("#abcdef").unwrap()
    );
}

#[test]
fn simple_serialization_is_lowercase() {
    let color = html5_parse_simple_color("#ABCDEF").unwrap();
    assert_eq!(html5_serialize_simple_color(color), "#abcdef");
}

#[test]
fn legacy_result_serializes_to_valid_simple_color() {
    for &(input, _) in LEGACY_VECTORS {
        let color = html5_parse_legacy_color(input).unwrap();
        let serialized = html5_serialize_simple_color(color);
        assert_eq!(html5_parse_simple_color(&serialized).unwrap(), color);
    }
}
