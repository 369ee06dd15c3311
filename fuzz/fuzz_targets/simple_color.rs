#![no_main]

use libfuzzer_sys::fuzz_target;
use webcolors::{html5_parse_simple_color, html5_serialize_simple_color};

fuzz_target!(|input: &str| {
    if let Ok(color) = html5_parse_simple_color(input) {
        assert_eq!(html5_serialize_simple_color(color), input.to_ascii_lowercase());
    }
});
