/// One rung of a four-step brightness ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Darkest = 0,
    Dim = 1,
    Base = 2,
    Bright = 3,
}

impl Shade {
    /// Map a brightness level to a rung; values outside 0..=3 clamp to the
    /// nearest end.
    pub fn from_brightness(brightness: i32) -> Self {
        match brightness {
            i32::MIN..=0 => Shade::Darkest,
            1 => Shade::Dim,
            2 => Shade::Base,
            _ => Shade::Bright,
        }
    }
}

/// Brightness ladder for one palette entry: `(darkest, dim, base, bright)`.
///
/// `base` is always the entry itself. Rungs may repeat, for example when no
/// distinct darker color exists and both dark rungs fall back to the same
/// near-black entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ramp {
    pub darkest: usize,
    pub dim: usize,
    pub base: usize,
    pub bright: usize,
}

impl Ramp {
    /// A ramp whose every rung is `index`, used for transparent entries.
    pub const fn uniform(index: usize) -> Self {
        Self {
            darkest: index,
            dim: index,
            base: index,
            bright: index,
        }
    }

    #[inline]
    pub fn shade(&self, shade: Shade) -> usize {
        match shade {
            Shade::Darkest => self.darkest,
            Shade::Dim => self.dim,
            Shade::Base => self.base,
            Shade::Bright => self.bright,
        }
    }

    #[inline]
    pub fn to_array(self) -> [usize; 4] {
        [self.darkest, self.dim, self.base, self.bright]
    }
}

impl From<[usize; 4]> for Ramp {
    fn from([darkest, dim, base, bright]: [usize; 4]) -> Self {
        Self {
            darkest,
            dim,
            base,
            bright,
        }
    }
}
