//! HTML5 simple and legacy color algorithms.
//!
//! <https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#colours>
//!
//! These are step-by-step transcriptions of the standard. Each step must
//! keep its observable effect on later steps, so do not fold them into a
//! shortcut that merely agrees on common inputs.

use crate::error::{Error, Result};
use crate::specification::Specification;
use crate::tables;
use crate::types::Html5SimpleColor;

/// Legacy input is cut to this many characters before digit extraction.
const LEGACY_MAX_LEN: usize = 128;

/// Components longer than this keep only their trailing digits.
const LEGACY_MAX_COMPONENT_LEN: usize = 8;

fn parse_hex_byte(digits: &str, input: &str) -> Result<u8> {
    u8::from_str_radix(digits, 16).map_err(|_| Error::InvalidHexDigits {
        input: input.to_string(),
    })
}

/// Parse a simple color: exactly `#` followed by six ASCII hex digits.
pub fn parse_simple_color(input: &str) -> Result<Html5SimpleColor> {
    let length = input.chars().count();
    if length != 7 {
        return Err(Error::InvalidLength { length });
    }

    if !input.starts_with('#') {
        return Err(Error::MissingHashPrefix);
    }

    if !input[1..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexDigits {
            input: input.to_string(),
        });
    }

    // Seven characters, the first being '#' and the rest ASCII, so byte
    // offsets and character offsets coincide from here on.
    Ok(Html5SimpleColor::new(
        parse_hex_byte(&input[1..3], input)?,
        parse_hex_byte(&input[3..5], input)?,
        parse_hex_byte(&input[5..7], input)?,
    ))
}

/// Serialize a simple color as a lowercase `#rrggbb` string.
#[must_use]
pub fn serialize_simple_color(color: Html5SimpleColor) -> String {
    let mut result = String::from("#");
    result.push_str(&format!("{:02x}", color.red));
    result.push_str(&format!("{:02x}", color.green));
    result.push_str(&format!("{:02x}", color.blue));
    result
}

/// Whitespace stripped from both ends of legacy input.
///
/// Unicode whitespace plus the ASCII information separators U+001C..U+001F,
/// which historical implementations of this algorithm also strip.
fn is_legacy_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn hex_digit_value(c: char) -> u32 {
    c.to_digit(16).unwrap_or(0)
}

fn component_value(component: &str) -> u8 {
    debug_assert!(component.len() <= 2, "component {component:?} longer than two digits");
    let value = component
        .chars()
        .fold(0u32, |acc, c| (acc << 4) | hex_digit_value(c));
    value as u8
}

/// Parse a legacy color value, as used by attributes like `bgcolor`.
///
/// Only the empty string and `transparent` are rejected. Every other input
/// yields some color, however mangled.
pub fn parse_legacy_color(input: &str) -> Result<Html5SimpleColor> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let input = input.trim_matches(is_legacy_whitespace);

    if input.eq_ignore_ascii_case("transparent") {
        return Err(Error::TransparentNotAllowed);
    }

    let keyword = input.to_ascii_lowercase();
    if let Some(hex) = tables::names_to_hex(Specification::Css3).get(&keyword) {
        tracing::trace!(keyword = %keyword, hex, "legacy color matched keyword");
        return parse_simple_color(hex);
    }

    let chars: Vec<char> = input.chars().collect();
    if chars.len() == 4 && chars[0] == '#' && chars[1..].iter().all(char::is_ascii_hexdigit) {
        let expand = |c: char| (hex_digit_value(c) * 17) as u8;
        tracing::trace!(input, "legacy color matched #rgb shorthand");
        return Ok(Html5SimpleColor::new(
            expand(chars[1]),
            expand(chars[2]),
            expand(chars[3]),
        ));
    }

    // Characters outside the basic multilingual plane become "00".
    let mut mangled: Vec<char> = Vec::with_capacity(chars.len());
    for c in chars {
        if u32::from(c) > 0xFFFF {
            mangled.extend(['0', '0']);
        } else {
            mangled.push(c);
        }
    }

    mangled.truncate(LEGACY_MAX_LEN);

    let digits = mangled.strip_prefix(&['#']).unwrap_or(&mangled[..]);

    let mut digits: String = digits
        .iter()
        .map(|&c| if c.is_ascii_hexdigit() { c } else { '0' })
        .collect();

    while digits.is_empty() || digits.len() % 3 != 0 {
        digits.push('0');
    }

    // All ASCII from here on, so byte slicing is character slicing.
    let mut length = digits.len() / 3;
    let mut red = &digits[..length];
    let mut green = &digits[length..length * 2];
    let mut blue = &digits[length * 2..];

    if length > LEGACY_MAX_COMPONENT_LEN {
        let skip = length - LEGACY_MAX_COMPONENT_LEN;
        red = &red[skip..];
        green = &green[skip..];
        blue = &blue[skip..];
        length = LEGACY_MAX_COMPONENT_LEN;
    }

    // Leading zeros go only while all three components have one.
    while length > 2 && red.starts_with('0') && green.starts_with('0') && blue.starts_with('0') {
        red = &red[1..];
        green = &green[1..];
        blue = &blue[1..];
        length -= 1;
    }

    if length > 2 {
        red = &red[..2];
        green = &green[..2];
        blue = &blue[..2];
    }

    tracing::trace!(red, green, blue, "legacy color components");

    Ok(Html5SimpleColor::new(
        component_value(red),
        component_value(green),
        component_value(blue),
    ))
}
