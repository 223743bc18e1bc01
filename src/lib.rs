//! palette-ramp: palette reduction and brightness ramps
//!
//! Given an arbitrary palette of RGBA colors, this crate builds:
//!
//! - a **reduction grid** that maps any color to its nearest palette entry in
//!   one lookup, and
//! - a **ramp table** giving every entry a `(darkest, dim, base, bright)`
//!   ladder of same-hue palette colors for shading under simulated light.
//!
//! ```
//! use palette_ramp::{build, Colorize, Palette, RampOptions, Rgba};
//!
//! let palette = Palette::from_packed(&[
//!     0x00000000, 0xFF0000FF, 0x00FF00FF, 0x0000FFFF, 0xFFFFFFFF, 0x000000FF,
//! ])?;
//! let colorizer = build(palette, &RampOptions::default())?;
//!
//! assert_eq!(colorizer.reduce(Rgba::new(0xFE0101FF)), 1);
//! assert_eq!(colorizer.brighten(5)?, 4);
//! # Ok::<(), palette_ramp::RampError>(())
//! ```
//!
//! The color math (Lab conversion, CIEDE2000, the fast luma/chroma metric)
//! lives in the `color-math` crate and is re-exported here.

pub mod error;
pub mod models;
pub mod services;

pub use color_math::{
    ciede2000, delta_e, lab_to_srgb, srgb_to_lab, weighted_euclidean, DistanceMetric, Lab, Rgba,
};
pub use error::{PaletteError, RampError};
pub use models::{ColorizerConfig, Palette, Ramp, RampOptions, Shade};
pub use services::{build, Colorize, Colorizer, PaletteMapping, RampSet};
