//! CIE L*a*b* color
//!
//! Conversion follows the classic sRGB -> XYZ (D65) -> L*a*b* route with the
//! four-digit sRGB matrix and the 0.008856 breakpoint. The inverse uses the
//! exact inverse of that matrix so 8-bit colors survive a round trip.

use super::lut::srgb8_to_linear;
use super::rgba::Rgba;
use crate::difference::DistanceMetric;

/// Reference white (D65, normalized to Y = 1)
const WHITE_X: f32 = 0.950489;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 1.088840;

/// Linear sRGB to XYZ
const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// Inverse of [`RGB_TO_XYZ`]
const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [3.2406254773, -1.5372079722, -0.4986285987],
    [-0.9689307147, 1.8757560609, 0.0415175238],
    [0.0557101204, -0.2040210506, 1.0569959423],
];

/// cbrt(0.008856)
const F_BREAKPOINT: f32 = 0.2068930344229638;

/// A color in CIE L*a*b*, with alpha carried along untouched.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
/// - `alpha`: Opacity, 0.0..=1.0
///
/// Values are not clamped; some Lab triples have no sRGB counterpart and are
/// clamped only when converted back.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
    pub alpha: f32,
}

impl Lab {
    #[inline]
    pub fn new(l: f32, a: f32, b: f32, alpha: f32) -> Self {
        Self { l, a, b, alpha }
    }

    /// Overwrite all four components.
    #[inline]
    pub fn set(&mut self, l: f32, a: f32, b: f32, alpha: f32) {
        *self = Self::new(l, a, b, alpha);
    }

    /// Overwrite all four components from a packed color.
    #[inline]
    pub fn set_rgba(&mut self, color: Rgba) {
        *self = Self::from(color);
    }

    /// Convert back to float sRGB channels, see [`lab_to_srgb`].
    #[inline]
    pub fn to_srgb(self) -> [f32; 4] {
        lab_to_srgb(self)
    }

    /// Distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f32 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Hue angle in degrees, 0.0..360.0. Neutral colors report 0.
    pub fn hue_degrees(self) -> f32 {
        if self.a == 0.0 && self.b == 0.0 {
            return 0.0;
        }
        let h = self.b.atan2(self.a).to_degrees();
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    }

    /// Rotate the hue by `degrees`, keeping lightness, chroma and alpha.
    ///
    /// # Example
    ///
    /// ```
    /// use color_math::Lab;
    ///
    /// let c = Lab::new(50.0, 20.0, 0.0, 1.0).rotate_hue(90.0);
    /// assert!(c.a.abs() < 1e-4);
    /// assert!((c.b - 20.0).abs() < 1e-4);
    /// ```
    pub fn rotate_hue(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            a: self.a * cos - self.b * sin,
            b: self.a * sin + self.b * cos,
            ..self
        }
    }

    /// Difference to `other` under the given metric.
    ///
    /// Both metrics return squared-scale values; compare them only against
    /// results of the same metric.
    pub fn difference(self, other: Lab, metric: DistanceMetric) -> f32 {
        metric.difference(self, other)
    }
}

impl From<Rgba> for Lab {
    /// Convert a packed color, decoding gamma through the 8-bit table.
    fn from(color: Rgba) -> Self {
        linear_to_lab(
            srgb8_to_linear(color.r()),
            srgb8_to_linear(color.g()),
            srgb8_to_linear(color.b()),
            color.a() as f32 / 255.0,
        )
    }
}

impl From<Lab> for Rgba {
    /// Convert back to a packed color; each channel is rounded and clamped.
    fn from(lab: Lab) -> Self {
        let [r, g, b, a] = lab_to_srgb(lab);
        Rgba::from_unit(r, g, b, a)
    }
}

/// NaN and out-of-range channel values are pulled into 0.0..=1.0.
#[inline]
fn unit(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

#[inline]
fn decode_gamma(x: f32) -> f32 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn encode_gamma(x: f32) -> f32 {
    if x <= 0.0031308 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

#[inline]
fn f_forward(t: f32) -> f32 {
    if t <= 0.008856 {
        7.787037 * t + 0.137931
    } else {
        t.cbrt()
    }
}

#[inline]
fn f_inverse(f: f32) -> f32 {
    if f > F_BREAKPOINT {
        f * f * f
    } else {
        (f - 0.137931) / 7.787037
    }
}

#[inline]
fn mul(m: &[[f32; 3]; 3], x: f32, y: f32, z: f32) -> [f32; 3] {
    [
        m[0][0] * x + m[0][1] * y + m[0][2] * z,
        m[1][0] * x + m[1][1] * y + m[1][2] * z,
        m[2][0] * x + m[2][1] * y + m[2][2] * z,
    ]
}

fn linear_to_lab(r: f32, g: f32, b: f32, alpha: f32) -> Lab {
    let [x, y, z] = mul(&RGB_TO_XYZ, r, g, b);
    let fx = f_forward(x / WHITE_X);
    let fy = f_forward(y / WHITE_Y);
    let fz = f_forward(z / WHITE_Z);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
        alpha,
    }
}

/// Convert float sRGB channels (0.0..=1.0) to Lab.
///
/// Inputs are clamped to 0.0..=1.0 first; NaN counts as 0.
///
/// # Example
///
/// ```
/// use color_math::srgb_to_lab;
///
/// let white = srgb_to_lab(1.0, 1.0, 1.0, 1.0);
/// assert!((white.l - 100.0).abs() < 0.01);
/// ```
pub fn srgb_to_lab(r: f32, g: f32, b: f32, a: f32) -> Lab {
    linear_to_lab(
        decode_gamma(unit(r)),
        decode_gamma(unit(g)),
        decode_gamma(unit(b)),
        unit(a),
    )
}

/// Convert Lab back to float sRGB channels `[r, g, b, a]`.
///
/// Out-of-gamut Lab values land on the nearest channel bound; every output
/// channel is in 0.0..=1.0.
pub fn lab_to_srgb(lab: Lab) -> [f32; 4] {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    let x = f_inverse(fx) * WHITE_X;
    let y = f_inverse(fy) * WHITE_Y;
    let z = f_inverse(fz) * WHITE_Z;

    let [r, g, b] = mul(&XYZ_TO_RGB, x, y, z);
    [
        encode_gamma(unit(r)),
        encode_gamma(unit(g)),
        encode_gamma(unit(b)),
        unit(lab.alpha),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Tolerance against the palette crate, which uses a more precise matrix
    const PALETTE_TOLERANCE: f32 = 0.5;

    fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() < tol
    }

    fn round_trip_error(color: Rgba) -> i32 {
        let back = Rgba::from(Lab::from(color));
        color
            .to_channels()
            .iter()
            .zip(back.to_channels())
            .map(|(&x, y)| (x as i32 - y as i32).abs())
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_known_values() {
        let white = Lab::from(Rgba::new(0xFFFFFFFF));
        assert!(approx_eq(white.l, 100.0, 0.01), "white L = {}", white.l);
        assert!(approx_eq(white.a, 0.0, 0.05), "white a = {}", white.a);
        assert!(approx_eq(white.b, 0.0, 0.05), "white b = {}", white.b);
        assert_eq!(white.alpha, 1.0);

        let black = Lab::from(Rgba::new(0x000000FF));
        assert!(approx_eq(black.l, 0.0, 1e-3), "black L = {}", black.l);

        // Textbook values for pure red: L 53.24, a 80.09, b 67.20
        let red = Lab::from(Rgba::new(0xFF0000FF));
        assert!(approx_eq(red.l, 53.24, 0.1), "red L = {}", red.l);
        assert!(approx_eq(red.a, 80.09, 0.2), "red a = {}", red.a);
        assert!(approx_eq(red.b, 67.20, 0.2), "red b = {}", red.b);
    }

    #[test]
    fn test_matches_palette_crate() {
        use palette::{IntoColor, Lab as PaletteLab, Srgb as PaletteSrgb};

        let test_colors = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.5, 0.5, 0.5),
            (0.2, 0.6, 0.9),
            (1.0, 1.0, 1.0),
            (0.0, 0.0, 0.0),
        ];

        for (r, g, b) in test_colors {
            let ours = srgb_to_lab(r, g, b, 1.0);
            let theirs: PaletteLab = PaletteSrgb::new(r, g, b).into_linear().into_color();

            assert!(
                approx_eq(ours.l, theirs.l, PALETTE_TOLERANCE),
                "L mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.l,
                theirs.l
            );
            assert!(
                approx_eq(ours.a, theirs.a, PALETTE_TOLERANCE),
                "a mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.a,
                theirs.a
            );
            assert!(
                approx_eq(ours.b, theirs.b, PALETTE_TOLERANCE),
                "b mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.b,
                theirs.b
            );
        }
    }

    #[test]
    fn test_lut_and_float_paths_agree() {
        for packed in [0x336699FFu32, 0xFF8000FF, 0x0A0A0AFF, 0xC0FFEE80] {
            let color = Rgba::new(packed);
            let [r, g, b, a] = color.to_channels().map(|c| c as f32 / 255.0);
            let from_lut = Lab::from(color);
            let from_float = srgb_to_lab(r, g, b, a);
            assert!(approx_eq(from_lut.l, from_float.l, 1e-3));
            assert!(approx_eq(from_lut.a, from_float.a, 1e-3));
            assert!(approx_eq(from_lut.b, from_float.b, 1e-3));
            assert_eq!(from_lut.alpha, from_float.alpha);
        }
    }

    /// Every gray level plus every primary ramp must survive within 1 LSB.
    #[test]
    fn test_round_trip_ramps() {
        for i in 0..=255u8 {
            for color in [
                Rgba::from_channels(i, i, i, 255),
                Rgba::from_channels(i, 0, 0, 255),
                Rgba::from_channels(0, i, 0, i),
                Rgba::from_channels(0, 0, i, 255),
                Rgba::from_channels(255, i, 255 - i, 255),
            ] {
                let error = round_trip_error(color);
                assert!(error <= 1, "round-trip error {error} for {color}");
            }
        }
    }

    #[test]
    fn test_round_trip_random_colors() {
        let mut rng = StdRng::seed_from_u64(0x1AB);
        for _ in 0..20_000 {
            let color = Rgba::new(rng.gen());
            let error = round_trip_error(color);
            assert!(error <= 1, "round-trip error {error} for {color}");
        }
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        let wild = Lab::new(120.0, 150.0, -200.0, 2.0);
        for channel in lab_to_srgb(wild) {
            assert!((0.0..=1.0).contains(&channel), "channel {channel} escaped");
        }

        let negative = Lab::new(-40.0, 0.0, 0.0, -1.0);
        assert_eq!(Rgba::from(negative).packed(), 0x00000000);
    }

    #[test]
    fn test_nan_input_is_clamped() {
        let lab = srgb_to_lab(f32::NAN, -1.0, 2.0, 1.0);
        let expected = srgb_to_lab(0.0, 0.0, 1.0, 1.0);
        assert_eq!(lab, expected);
    }

    #[test]
    fn test_setters_overwrite_everything() {
        let mut lab = Lab::new(1.0, 2.0, 3.0, 0.5);
        lab.set(10.0, 20.0, 30.0, 1.0);
        assert_eq!(lab, Lab::new(10.0, 20.0, 30.0, 1.0));

        lab.set_rgba(Rgba::new(0x00000000));
        assert!(approx_eq(lab.l, 0.0, 1e-3));
        assert_eq!(lab.alpha, 0.0);
    }

    #[test]
    fn test_hue_helpers() {
        let gray = Lab::new(50.0, 0.0, 0.0, 1.0);
        assert_eq!(gray.hue_degrees(), 0.0);
        assert_eq!(gray.chroma(), 0.0);

        let blueish = Lab::new(50.0, 0.0, -30.0, 1.0);
        assert!(approx_eq(blueish.hue_degrees(), 270.0, 1e-3));
        assert!(approx_eq(blueish.chroma(), 30.0, 1e-4));

        let turned = blueish.rotate_hue(180.0);
        assert!(approx_eq(turned.hue_degrees(), 90.0, 1e-2));
        assert!(approx_eq(turned.chroma(), 30.0, 1e-3));
        assert_eq!(turned.l, blueish.l);
    }
}
