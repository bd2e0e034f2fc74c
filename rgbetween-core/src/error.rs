//! Gradient error types.

use thiserror::Error;

/// A hex color string that could not be decoded.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ColorFormatError {
    #[error("Hex color {0:?} does not start with '#'")]
    MissingPrefix(String),

    #[error("Hex color {input:?} has invalid length {len} (expected 7 or 9)")]
    InvalidLength { input: String, len: usize },

    #[error("Hex color {input:?} has a non-hex digit at position {position}")]
    InvalidDigit { input: String, position: usize },
}

/// An invalid combination of colors and stops.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("Gradient needs at least 2 colors, got {0}")]
    TooFewColors(usize),

    #[error("Colors and stops must have the same length ({colors} colors, {stops} stops)")]
    StopCountMismatch { colors: usize, stops: usize },

    #[error("Stop {index} is not a finite number")]
    NonFiniteStop { index: usize },

    #[error("Stop {index} ({stop}) is smaller than the previous stop ({previous})")]
    NonMonotonicStops {
        index: usize,
        previous: f64,
        stop: f64,
    },

    #[error("Stop {index} ({stop}) is equal to the previous stop")]
    DuplicateStop { index: usize, stop: f64 },

    #[error("First stop must be 0, got {0}")]
    FirstStopNotZero(f64),

    #[error("Last stop must be 1, got {0}")]
    LastStopNotOne(f64),

    #[error("Color {index} has {found} channels, expected {expected}")]
    MixedChannels {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Stops must be omitted when colors are given as (color, stop) pairs")]
    StopsWithPairs,

    #[error("Colors must be either all hex strings or all (color, stop) pairs")]
    MixedColorForms,
}

/// Any failure while building a gradient.
#[derive(Debug, Error)]
pub enum GradientError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    ColorFormat(#[from] ColorFormatError),

    #[error("Invalid gradient description: {0}")]
    Json(#[from] serde_json::Error),
}
