//! webcolors: color names and color value formats of HTML and CSS
//!
//! Maps between the color names defined by HTML 4, CSS 2, CSS 2.1, CSS 3 and
//! the colorhexa.com list, normalized hex strings, and `rgb()` triplets in
//! integer and percentage form. Also implements the HTML5 simple and legacy
//! color parsing algorithms.
//!
//! # Architecture
//!
//! ```text
//! caller value → normalize → convert (tables lookup / arithmetic) → result
//!
//! legacy string → html5::parse_legacy_color → Html5SimpleColor
//! ```
//!
//! # Modules
//!
//! - `specification`: the supported color name lists
//! - `tables`: static name ↔ hex tables, built once on first use
//! - `normalize`: canonical hex, clamped integer and percentage triplets
//! - `convert`: conversions between names, hex and triplets
//! - `html5`: the HTML5 simple and legacy color algorithms
//! - `config`: TOML configuration (default specification, logging)
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use webcolors::{Specification, hex_to_name, name_to_hex, html5_parse_legacy_color};
//!
//! assert_eq!(name_to_hex("RED", Specification::Css3).unwrap(), "#ff0000");
//! assert_eq!(hex_to_name("#a9a9a9", Specification::Css3).unwrap(), "darkgray");
//! let color = html5_parse_legacy_color("chucknorris").unwrap();
//! assert_eq!((color.red, color.green, color.blue), (192, 0, 0));
//! ```
//!
//! # Safety
//!
//! This crate forbids unsafe code.

#![forbid(unsafe_code)]

pub mod config;
pub mod convert;
pub mod error;
pub mod html5;
pub mod logging;
pub mod normalize;
pub mod specification;
pub mod tables;
pub mod types;

pub use convert::{
    ColorConverter, hex_to_name, hex_to_rgb, hex_to_rgb_percent, name_to_hex, name_to_rgb,
    name_to_rgb_percent, rgb_percent_to_hex, rgb_percent_to_name, rgb_percent_to_rgb,
    rgb_to_hex, rgb_to_name, rgb_to_rgb_percent,
};
pub use error::{Error, Result};
pub use html5::{
    parse_legacy_color as html5_parse_legacy_color,
    parse_simple_color as html5_parse_simple_color,
    serialize_simple_color as html5_serialize_simple_color,
};
pub use normalize::{normalize_hex, normalize_integer_triplet, normalize_percent_triplet};
pub use specification::Specification;
pub use types::{Html5SimpleColor, IntegerRgb, PercentRgb};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
