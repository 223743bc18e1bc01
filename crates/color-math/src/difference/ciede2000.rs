//! CIEDE2000 color difference
//!
//! Implements the formula as published in G. Sharma, W. Wu, E. N. Dalal,
//! "The CIEDE2000 color-difference formula: Implementation notes,
//! supplementary test data, and mathematical observations" (2005).
//! All angles are kept in degrees; trig helpers convert at the call.

use crate::color::Lab;

/// 25^7
const POW25_7: f32 = 6_103_515_625.0;

#[inline]
fn sin_deg(x: f32) -> f32 {
    x.to_radians().sin()
}

#[inline]
fn cos_deg(x: f32) -> f32 {
    x.to_radians().cos()
}

#[inline]
fn hue_deg(b: f32, a_prime: f32) -> f32 {
    if a_prime == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Squared CIEDE2000 difference (kL = kC = kH = 1).
///
/// Returns ΔE00², so callers that want the usual scale take the square root
/// (or use [`delta_e`]). Alpha is ignored.
///
/// # Example
///
/// ```
/// use color_math::{ciede2000, Lab};
///
/// let x = Lab::new(50.0, 2.6772, -79.7751, 1.0);
/// let y = Lab::new(50.0, 0.0, -82.7485, 1.0);
/// assert!((ciede2000(x, y).sqrt() - 2.0425).abs() < 1e-3);
/// ```
pub fn ciede2000(x: Lab, y: Lab) -> f32 {
    let c1_star = (x.a * x.a + x.b * x.b).sqrt();
    let c2_star = (y.a * y.a + y.b * y.b).sqrt();
    let c_bar = (c1_star + c2_star) * 0.5;

    // G factor pulls a* away from the neutral axis for low-chroma pairs
    let c_bar_7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + POW25_7)).sqrt());

    let a1_prime = x.a * (1.0 + g);
    let a2_prime = y.a * (1.0 + g);

    let c1_prime = (a1_prime * a1_prime + x.b * x.b).sqrt();
    let c2_prime = (a2_prime * a2_prime + y.b * y.b).sqrt();

    let h1_prime = hue_deg(x.b, a1_prime);
    let h2_prime = hue_deg(y.b, a2_prime);

    let dl_prime = y.l - x.l;
    let dc_prime = c2_prime - c1_prime;

    let chroma_product = c1_prime * c2_prime;
    let dh_prime = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };
    let dh_prime_big = 2.0 * chroma_product.sqrt() * sin_deg(dh_prime * 0.5);

    let l_bar_prime = (x.l + y.l) * 0.5;
    let c_bar_prime = (c1_prime + c2_prime) * 0.5;

    let h_sum = h1_prime + h2_prime;
    let h_bar_prime = if chroma_product == 0.0 {
        h_sum
    } else if (h1_prime - h2_prime).abs() <= 180.0 {
        h_sum * 0.5
    } else if h_sum < 360.0 {
        (h_sum + 360.0) * 0.5
    } else {
        (h_sum - 360.0) * 0.5
    };

    let t = 1.0 - 0.17 * cos_deg(h_bar_prime - 30.0)
        + 0.24 * cos_deg(2.0 * h_bar_prime)
        + 0.32 * cos_deg(3.0 * h_bar_prime + 6.0)
        - 0.20 * cos_deg(4.0 * h_bar_prime - 63.0);

    let l_mid = l_bar_prime - 50.0;
    let l_mid_sq = l_mid * l_mid;
    let sl = 1.0 + 0.015 * l_mid_sq / (20.0 + l_mid_sq).sqrt();
    let sc = 1.0 + 0.045 * c_bar_prime;
    let sh = 1.0 + 0.015 * c_bar_prime * t;

    // Rotation term, only significant in the blue region around 275°
    let h_off = (h_bar_prime - 275.0) / 25.0;
    let delta_theta = 30.0 * (-(h_off * h_off)).exp();
    let c_bar_prime_7 = c_bar_prime.powi(7);
    let rc = 2.0 * (c_bar_prime_7 / (c_bar_prime_7 + POW25_7)).sqrt();
    let rt = -rc * sin_deg(2.0 * delta_theta);

    let dl_term = dl_prime / sl;
    let dc_term = dc_prime / sc;
    let dh_term = dh_prime_big / sh;

    dl_term * dl_term + dc_term * dc_term + dh_term * dh_term + rt * dc_term * dh_term
}

/// CIEDE2000 ΔE00 on the usual (non-squared) scale.
#[inline]
pub fn delta_e(x: Lab, y: Lab) -> f32 {
    ciede2000(x, y).max(0.0).sqrt()
}
