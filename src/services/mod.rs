pub mod colorizer;
pub mod mapping;
pub mod ramp_builder;

pub use colorizer::{build, Colorize, Colorizer, RampSet};
pub use mapping::{Cell, PaletteMapping, CHROMA_LEVELS, GRID_CELLS, LUMA_LEVELS};
pub use ramp_builder::{build_ramps, Fallbacks};
