//! Serializable gradient descriptions.
//!
//! A description lists colors either as plain hex strings (with optional
//! parallel stops) or as `[hex, stop]` pairs:
//!
//! ```json
//! { "colors": ["#000000", "#ff8000", "#ffffff"], "stops": [0.0, 0.3, 1.0], "easing": 0.1 }
//! { "colors": [["#000000", 0.0], ["#ffffff", 1.0]] }
//! ```

use crate::error::{ConfigError, GradientError};
use crate::Gradient;
use serde::{Deserialize, Serialize};

/// Default easing amount (0.0 = linear blending).
pub const DEFAULT_EASING: f64 = 0.0;

/// Minimum easing amount.
pub const MIN_EASING: f64 = 0.0;

/// Maximum easing amount.
pub const MAX_EASING: f64 = 1.0;

fn default_easing() -> f64 {
    DEFAULT_EASING
}

/// One color of a description: a hex string or a `[hex, stop]` pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Hex(String),
    Stop(String, f64),
}

/// Serializable form of a [`Gradient`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientConfig {
    pub colors: Vec<ColorEntry>,
    /// Only allowed when `colors` are plain hex strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<f64>>,
    #[serde(default = "default_easing")]
    pub easing: f64,
}

impl GradientConfig {
    pub fn from_json(json: &str) -> Result<Self, GradientError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, GradientError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate the description and build the gradient.
    pub fn build(self) -> Result<Gradient, GradientError> {
        let GradientConfig {
            colors,
            stops,
            easing,
        } = self;

        let gradient = if let Some(ColorEntry::Stop(..)) = colors.first() {
            if stops.is_some() {
                return Err(ConfigError::StopsWithPairs.into());
            }
            let pairs = colors
                .into_iter()
                .map(|entry| match entry {
                    ColorEntry::Stop(hex, stop) => Ok((hex, stop)),
                    ColorEntry::Hex(_) => Err(ConfigError::MixedColorForms),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Gradient::from_pairs(&pairs)?
        } else {
            let hexes = colors
                .into_iter()
                .map(|entry| match entry {
                    ColorEntry::Hex(hex) => Ok(hex),
                    ColorEntry::Stop(..) => Err(ConfigError::MixedColorForms),
                })
                .collect::<Result<Vec<_>, _>>()?;
            match stops {
                Some(stops) => Gradient::with_stops(&hexes, &stops)?,
                None => Gradient::new(&hexes)?,
            }
        };

        Ok(gradient.with_easing(easing))
    }
}

impl TryFrom<GradientConfig> for Gradient {
    type Error = GradientError;

    fn try_from(config: GradientConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

impl From<Gradient> for GradientConfig {
    fn from(gradient: Gradient) -> Self {
        gradient.to_config()
    }
}

impl Gradient {
    /// Describe this gradient. Evenly spaced stops are left implicit.
    pub fn to_config(&self) -> GradientConfig {
        GradientConfig {
            colors: self
                .colors()
                .iter()
                .map(|c| ColorEntry::Hex(c.to_hex()))
                .collect(),
            stops: (!self.has_uniform_stops()).then(|| self.stops().to_vec()),
            easing: self.easing(),
        }
    }

    /// Parse and validate a JSON description.
    pub fn from_json(json: &str) -> Result<Self, GradientError> {
        GradientConfig::from_json(json)?.build()
    }

    pub fn to_json(&self) -> Result<String, GradientError> {
        self.to_config().to_json()
    }
}
