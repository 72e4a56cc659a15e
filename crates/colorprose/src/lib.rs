//! # Color 🌸 Prose
//!
//! Colorprose describes colors in words and turns words back into colors.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature for the Python integration as well. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. "
)]
//!
//!
//! ## 1. Overview
//!
//! Colorprose's main abstractions are:
//!
//!   * [`Color`] implements **colors in Oklab**, the perceptually uniform color
//!     space, with three [`Float`] coordinates and an alpha channel. Its
//!     methods lighten and darken, enrich and dullen, mix, and gamut map
//!     colors.
//!   * [`Palette`] maps **color names** to colors. The [standard
//!     palette](Palette::standard) has some fifty common colors. Custom
//!     palettes are assembled with [`PaletteBuilder`] or parsed from a
//!     plain-text listing.
//!   * The [`describe`] module implements the **color description language**.
//!     It recognizes eight families of adjectives in four tiers each, parses
//!     descriptions into colors, and searches for the description best
//!     matching a color.
//!
//!
//! ## 2. Words to Colors and Back
//!
//! [`parse_description`] turns words into a color. It mixes all named colors
//! and then adjusts lightness and saturation according to the adjectives:
//!
//! ```
//! # use colorprose::{parse_description, Palette};
//! let color = parse_description("light rich red");
//! let red = Palette::standard().lookup("red");
//! assert!(color.lightness() > red.lightness());
//!
//! // Word order does not matter, punctuation separates words.
//! assert_eq!(parse_description("red, rich & light"), color);
//! ```
//!
//! [`best_match`] goes the other way. It exhaustively searches all
//! combinations of adjectives and names for the one closest to the color:
//!
//! ```
//! # use colorprose::{best_match, Color};
//! assert_eq!(best_match(&Color::from_24bit(0xff, 0x80, 0), 1), "orange");
//! ```
//!
//! Descriptions never fail. Unknown words count as the neutral color, which
//! has zero lightness, chroma, and alpha.
//!
//!
//! ## 3. Optional Features
//!
//! Colorprose supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls colorprose's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!
//! ## 4. Logging
//!
//! Colorprose logs through the [`log`](https://docs.rs/log) facade but does
//! not install a logger. Building the standard palette and phrase table as
//! well as every described color are logged at debug level, unknown color
//! names at trace level.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod color;
mod core;
pub mod describe;
pub mod error;
mod palette;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use color::{Color, ACHROMATIC_THRESHOLD};
pub use palette::{Palette, PaletteBuilder};

/// Parse the color description with the standard palette.
///
/// See [`describe::parse_description`].
pub fn parse_description(text: &str) -> Color {
    describe::parse_description(Palette::standard(), text)
}

/// Describe the color with the standard palette, mixing `mix_count` names.
///
/// See [`describe::best_match`]. Since the search is exhaustive, a
/// `mix_count` of more than two takes a long time.
pub fn best_match(color: &Color, mix_count: usize) -> String {
    describe::best_match(Palette::standard(), color, mix_count)
}

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Parse the color description with the standard palette. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction(name = "parse_description")]
fn py_parse_description(text: &str) -> Color {
    parse_description(text)
}

/// Describe the color with the standard palette. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction(name = "best_match")]
#[pyo3(signature = (color, mix_count = 1))]
fn py_best_match(color: Color, mix_count: usize) -> String {
    best_match(&color, mix_count)
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorprose(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_description, m)?)?;
    m.add_function(wrap_pyfunction!(py_best_match, m)?)?;
    m.add_class::<Color>()?;
    m.add("ACHROMATIC_THRESHOLD", ACHROMATIC_THRESHOLD)?;
    Ok(())
}
