//! Test palettes.

use palette_ramp::{Palette, Rgba};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Transparent, red, green, blue, white, black.
pub fn primaries() -> Palette {
    Palette::from_packed(&[
        0x00000000, 0xFF0000FF, 0x00FF00FF, 0x0000FFFF, 0xFFFFFFFF, 0x000000FF,
    ])
    .unwrap()
}

/// Transparent followed by six evenly spaced grays, dark to light.
pub fn grays() -> Palette {
    Palette::from_packed(&[
        0x00000000, 0x000000FF, 0x333333FF, 0x666666FF, 0x999999FF, 0xCCCCCCFF, 0xFFFFFFFF,
    ])
    .unwrap()
}

/// Transparent followed by the 32-color DawnBringer palette.
pub fn db32() -> Palette {
    let mut colors = vec!["#00000000"];
    colors.extend_from_slice(&[
        "000000", "222034", "45283c", "663931", "8f563b", "df7126", "d9a066", "eec39a",
        "fbf236", "99e550", "6abe30", "37946e", "4b692f", "524b24", "323c39", "3f3f74",
        "306082", "5b6ee1", "639bff", "5fcde4", "cbdbfc", "ffffff", "9badb7", "847e87",
        "696a6a", "595652", "76428a", "ac3232", "d95763", "d77bba", "8f974a", "8a6f30",
    ]);
    Palette::from_hex(&colors).unwrap()
}

/// Transparent followed by the 16-color PICO-8 palette.
pub fn pico8() -> Palette {
    Palette::from_hex(&[
        "00000000", "000000", "1D2B53", "7E2553", "008751", "AB5236", "5F574F", "C2C3C7",
        "FFF1E8", "FF004D", "FFA300", "FFEC27", "00E436", "29ADFF", "83769C", "FF77A8",
        "FFCCAA",
    ])
    .unwrap()
}

/// Random palette of `len` entries: index 0 transparent, the rest opaque.
pub fn random_palette(seed: u64, len: usize) -> Palette {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut colors = vec![Rgba::TRANSPARENT];
    colors.extend((1..len).map(|_| Rgba::from_channels(rng.gen(), rng.gen(), rng.gen(), 0xFF)));
    Palette::new(colors).unwrap()
}

/// Random opaque color.
pub fn random_color(rng: &mut StdRng) -> Rgba {
    Rgba::from_channels(rng.gen(), rng.gen(), rng.gen(), 0xFF)
}
