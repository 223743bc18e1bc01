#![allow(clippy::excessive_precision, clippy::manual_range_contains)]

//! color-math: CIE L*a*b* conversion and color difference metrics
//!
//! This crate holds the pure numeric side of palette work: converting packed
//! RGBA colors to and from CIE L*a*b*, measuring perceptual differences, and a
//! cheap integer luma/chroma transform used for coarse nearest-neighbor search.
//! Nothing here keeps state.
//!
//! # Quick Start
//!
//! ```
//! use color_math::{ciede2000, Lab, Rgba};
//!
//! let red = Lab::from(Rgba::new(0xFF0000FF));
//! let green = Lab::from(Rgba::new(0x00FF00FF));
//!
//! // Squared ΔE00: take the square root for the usual scale
//! assert!(ciede2000(red, green) > 2000.0);
//! assert_eq!(ciede2000(red, red), 0.0);
//! ```
//!
//! # Color Spaces
//!
//! | Type | Key Property | Used For |
//! |------|--------------|----------|
//! | [`Rgba`] | Packed 8-bit sRGB + alpha (`0xRRGGBBAA`) | Palette entries, input/output |
//! | [`Lab`] | CIE L*a*b* (D65 white) | Perceptual comparisons via [`ciede2000`] |
//! | [`LumaChroma`] | Integer YCoCg-like triple | Fast approximate matching only |
//!
//! ## Which difference to use
//!
//! - [`ciede2000`] is the accurate one. It is also the slowest, with several
//!   trig calls per comparison.
//! - [`weighted_euclidean`] works on the same [`Lab`] values with a fixed
//!   per-axis weighting. It is fine for inner loops over thousands of
//!   candidates.
//! - [`fast_difference`] works on [`LumaChroma`] integers and never touches
//!   floating point. It is only good enough to pick a neighbor on a coarse
//!   grid; never show its result to a user as "the" color difference.

pub mod color;
pub mod difference;

pub use color::{lab_to_srgb, srgb_to_lab, Lab, ParseColorError, Rgba};
pub use difference::{
    ciede2000, delta_e, fast_difference, fast_luma_chroma, weighted_euclidean, DistanceMetric,
    LumaChroma,
};
