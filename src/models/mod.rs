pub mod config;
pub mod palette;
pub mod ramp;

pub use config::{ColorizerConfig, RampOptions};
pub use palette::{Palette, MAX_PALETTE_LEN};
pub use ramp::{Ramp, Shade};
