#![no_main]

use libfuzzer_sys::fuzz_target;
use webcolors::{
    Error, html5_parse_legacy_color, html5_parse_simple_color, html5_serialize_simple_color,
};

fuzz_target!(|input: &str| {
    match html5_parse_legacy_color(input) {
        Ok(color) => {
            // Whatever the input, the result is a valid simple color.
            let serialized = html5_serialize_simple_color(color);
            assert_eq!(html5_parse_simple_color(&serialized), Ok(color));
        }
        Err(Error::EmptyInput) => assert!(input.is_empty()),
        Err(Error::TransparentNotAllowed) => {
            assert!(input.to_ascii_lowercase().contains("transparent"));
        }
        Err(other) => panic!("unexpected legacy color error for {input:?}: {other}"),
    }
});
