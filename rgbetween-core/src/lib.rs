//! Color gradients evaluated over [0, 1].
//!
//! A [`Gradient`] holds anchor colors at stop positions and blends the two
//! colors around a query position, optionally easing the blend near stops.

pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod gradient;
pub mod presets;

pub use color::Color;
pub use config::{ColorEntry, GradientConfig, DEFAULT_EASING, MAX_EASING, MIN_EASING};
pub use easing::{square_ease, Easing};
pub use error::{ColorFormatError, ConfigError, GradientError};
pub use gradient::Gradient;
pub use presets::{factory_defaults, get_preset, Preset};
