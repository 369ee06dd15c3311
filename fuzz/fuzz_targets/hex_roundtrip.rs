#![no_main]

use libfuzzer_sys::fuzz_target;
use webcolors::{hex_to_rgb, normalize_hex, rgb_to_hex};

fuzz_target!(|input: &str| {
    if let Ok(normalized) = normalize_hex(input) {
        assert_eq!(normalize_hex(&normalized).as_deref(), Ok(normalized.as_str()));
        let rgb = hex_to_rgb(input).expect("normalized hex converts");
        assert_eq!(rgb_to_hex(rgb), normalized);
    } else {
        assert!(hex_to_rgb(input).is_err());
    }
});
