//! Gamma lookup table access
//!
//! The 8-bit decode table is generated at compile time by build.rs with the
//! same companding formula [`super::lab::srgb_to_lab`] applies to floats.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode an 8-bit sRGB channel to linear light.
#[inline]
pub fn srgb8_to_linear(channel: u8) -> f32 {
    SRGB8_TO_LINEAR[channel as usize]
}
