use serde::Deserialize;

use crate::error::RampError;
use crate::models::Palette;
use crate::services::{Colorizer, LUMA_LEVELS};

/// Tuning for grid fill and ramp walks.
///
/// The defaults are empirically tuned values with no deeper derivation;
/// every field can be overridden from YAML.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RampOptions {
    /// Minimum fast difference between an entry and a ramp neighbor
    #[serde(default = "default_distinct_threshold")]
    pub distinct_threshold: i32,

    /// Fill pass skips candidates whose luma is this far or farther from the cell
    #[serde(default = "default_luma_search_radius")]
    pub luma_search_radius: i32,

    /// Luma offset of the first probe in a ramp walk
    #[serde(default = "default_first_step")]
    pub first_step: i32,

    /// Chroma scale applied per step while walking toward lighter cells
    #[serde(default = "default_lighten_chroma_shrink")]
    pub lighten_chroma_shrink: f32,

    /// Chroma scale applied per step while walking toward darker cells
    #[serde(default = "default_darken_chroma_shrink")]
    pub darken_chroma_shrink: f32,

    /// Largest chroma part of the fast difference between a ramp neighbor
    /// and the walk position
    #[serde(default = "default_max_chroma_drift")]
    pub max_chroma_drift: i32,

    /// Entry used when no lighter neighbor exists (default: resolved from the grid)
    #[serde(default)]
    pub near_white: Option<usize>,

    /// Entry used when no darker neighbor exists (default: resolved from the grid)
    #[serde(default)]
    pub near_black: Option<usize>,
}

fn default_distinct_threshold() -> i32 {
    64
}

fn default_luma_search_radius() -> i32 {
    28
}

fn default_first_step() -> i32 {
    2
}

fn default_lighten_chroma_shrink() -> f32 {
    0.95
}

fn default_darken_chroma_shrink() -> f32 {
    0.93
}

fn default_max_chroma_drift() -> i32 {
    192
}

impl Default for RampOptions {
    fn default() -> Self {
        Self {
            distinct_threshold: default_distinct_threshold(),
            luma_search_radius: default_luma_search_radius(),
            first_step: default_first_step(),
            lighten_chroma_shrink: default_lighten_chroma_shrink(),
            darken_chroma_shrink: default_darken_chroma_shrink(),
            max_chroma_drift: default_max_chroma_drift(),
            near_white: None,
            near_black: None,
        }
    }
}

impl RampOptions {
    /// Parse options from YAML; missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, RampError> {
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse options from YAML, falling back to the defaults on any error.
    pub fn from_yaml_or_default(yaml: &str) -> Self {
        match Self::from_yaml(yaml) {
            Ok(options) => {
                tracing::debug!(?options, "Loaded ramp options");
                options
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse ramp options, using defaults");
                Self::default()
            }
        }
    }

    /// Reject values that would make the walks or the fill pass meaningless.
    pub fn validate(&self) -> Result<(), RampError> {
        let max_step = LUMA_LEVELS as i32 - 1;
        if !(1..=max_step).contains(&self.first_step) {
            return Err(RampError::Config(format!(
                "first_step must be in 1..={max_step}, got {}",
                self.first_step
            )));
        }
        if self.luma_search_radius < 1 {
            return Err(RampError::Config(format!(
                "luma_search_radius must be at least 1, got {}",
                self.luma_search_radius
            )));
        }
        for (name, value) in [
            ("lighten_chroma_shrink", self.lighten_chroma_shrink),
            ("darken_chroma_shrink", self.darken_chroma_shrink),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(RampError::Config(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        if self.distinct_threshold < 0 || self.max_chroma_drift < 0 {
            return Err(RampError::Config(
                "distinct_threshold and max_chroma_drift must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// A complete colorizer description: palette, tuning, and optionally a
/// pre-computed ramp table to use instead of generated ramps.
#[derive(Debug, Deserialize, Clone)]
pub struct ColorizerConfig {
    pub palette: Palette,

    #[serde(default)]
    pub ramp: RampOptions,

    /// Literal `[darkest, dim, base, bright]` rows, one per palette entry
    #[serde(default)]
    pub literal_ramps: Option<Vec<[usize; 4]>>,
}

impl ColorizerConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, RampError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.ramp.validate()?;
        tracing::info!(
            colors = config.palette.len(),
            literal = config.literal_ramps.is_some(),
            "Loaded colorizer configuration"
        );
        Ok(config)
    }

    /// Build the described colorizer.
    pub fn build(self) -> Result<Colorizer, RampError> {
        match self.literal_ramps {
            Some(table) => Colorizer::with_literal_ramps(self.palette, table, &self.ramp),
            None => Colorizer::build(self.palette, &self.ramp),
        }
    }
}
