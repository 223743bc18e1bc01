//! Color types and conversion utilities
//!
//! - [`Rgba`]: a packed 32-bit color, the unit palettes are made of.
//! - [`Lab`]: CIE L*a*b* with alpha carried along, for perceptual math.
//!
//! # Example
//!
//! ```
//! use color_math::{Lab, Rgba};
//!
//! let orange: Rgba = "#FF8000".parse().unwrap();
//! let lab = Lab::from(orange);
//!
//! // Back to the same packed color
//! assert_eq!(Rgba::from(lab), orange);
//! ```

mod error;
mod lab;
mod lut;
mod rgba;

pub use error::ParseColorError;
pub use lab::{lab_to_srgb, srgb_to_lab, Lab};
pub use rgba::Rgba;
