//! Color gradients with positioned stops and optional easing.

use crate::color::Color;
use crate::config::GradientConfig;
use crate::easing::Easing;
use crate::error::{ConfigError, GradientError};
use serde::{Deserialize, Serialize};

/// A color gradient over [0, 1].
///
/// Holds at least two colors, one stop per color. Stops start at 0, end at 1
/// and strictly increase. All colors have the same channel count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GradientConfig", into = "GradientConfig")]
pub struct Gradient {
    colors: Vec<Color>,
    stops: Vec<f64>,
    /// Stops were generated as `i / (n - 1)` rather than supplied.
    uniform: bool,
    easing: Easing,
}

impl Gradient {
    /// Create a gradient from hex colors with evenly spaced stops.
    pub fn new<S: AsRef<str>>(colors: &[S]) -> Result<Self, GradientError> {
        let colors = decode_all(colors)?;
        Ok(Self::from_colors(colors, None)?)
    }

    /// Create a gradient from hex colors and one stop per color.
    pub fn with_stops<S: AsRef<str>>(colors: &[S], stops: &[f64]) -> Result<Self, GradientError> {
        let colors = decode_all(colors)?;
        Ok(Self::from_colors(colors, Some(stops.to_vec()))?)
    }

    /// Create a gradient from `(hex color, stop)` pairs.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[(S, f64)]) -> Result<Self, GradientError> {
        let pairs = pairs
            .iter()
            .map(|(hex, stop)| Color::from_hex(hex.as_ref()).map(|color| (color, *stop)))
            .collect::<Result<Vec<_>, _>>()?;
        let (colors, stops) = pairs.into_iter().unzip();
        Ok(Self::from_colors(colors, Some(stops))?)
    }

    /// Create a gradient from decoded colors.
    ///
    /// When `stops` is `None` they are spaced evenly. Supplied stops must
    /// match the color count, start at 0, end at 1 and strictly increase.
    pub fn from_colors(colors: Vec<Color>, stops: Option<Vec<f64>>) -> Result<Self, ConfigError> {
        let n = colors.len();
        if n < 2 {
            return Err(ConfigError::TooFewColors(n));
        }

        let expected = colors[0].channel_count();
        if let Some((index, color)) = colors
            .iter()
            .enumerate()
            .find(|(_, c)| c.channel_count() != expected)
        {
            return Err(ConfigError::MixedChannels {
                index,
                expected,
                found: color.channel_count(),
            });
        }

        let uniform = stops.is_none();
        let stops = match stops {
            Some(stops) => {
                validate_stops(&stops, n)?;
                stops
            }
            None => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
        };

        log::debug!(
            "Built gradient: {} colors, {} stops, {} channels",
            n,
            if uniform { "uniform" } else { "custom" },
            expected
        );

        Ok(Self {
            colors,
            stops,
            uniform,
            easing: Easing::default(),
        })
    }

    /// Set the easing amount for all later evaluations. Clamped into [0, 1].
    pub fn set_easing(&mut self, amount: f64) {
        self.easing = Easing::new(amount);
    }

    /// Builder form of [`Gradient::set_easing`].
    pub fn with_easing(mut self, amount: f64) -> Self {
        self.set_easing(amount);
        self
    }

    pub fn easing(&self) -> f64 {
        self.easing.amount()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn stops(&self) -> &[f64] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a gradient holds at least two colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn has_alpha(&self) -> bool {
        self.colors[0].has_alpha()
    }

    pub fn has_uniform_stops(&self) -> bool {
        self.uniform
    }

    /// Color at position `t`.
    ///
    /// Positions at or below the first stop (and NaN) give the first color,
    /// positions at or above the last stop give the last color.
    pub fn evaluate(&self, t: f64) -> Color {
        let last = self.colors.len() - 1;
        if t.is_nan() || t <= self.stops[0] {
            return self.colors[0];
        }
        if t >= self.stops[last] {
            return self.colors[last];
        }

        let i = self.segment_index(t);
        let (s1, s2) = (self.stops[i], self.stops[i + 1]);
        let u = ((t - s1) / (s2 - s1)).clamp(0.0, 1.0);

        let (a, b) = self.easing.weights(u);
        self.colors[i].mix(&self.colors[i + 1], a, b)
    }

    /// Color at position `t`, encoded as `#rrggbb` or `#rrggbbaa`.
    pub fn evaluate_hex(&self, t: f64) -> String {
        self.evaluate(t).to_hex()
    }

    /// Sample `size` evenly spaced positions into RGBA bytes.
    pub fn to_lut(&self, size: usize) -> Vec<[u8; 4]> {
        if size < 2 {
            return vec![self.colors[0].to_bytes(); size];
        }
        (0..size)
            .map(|i| {
                let t = i as f64 / (size - 1) as f64;
                self.evaluate(t).to_bytes()
            })
            .collect()
    }

    /// Index `i` of the segment `[stops[i], stops[i + 1])` containing `t`.
    ///
    /// `t` must lie strictly between the first and last stop.
    fn segment_index(&self, t: f64) -> usize {
        let last = self.stops.len() - 2;

        if self.uniform {
            let mut i = ((((self.stops.len() - 1) as f64) * t).floor() as usize).min(last);
            // Step across a stop where the product rounded past it
            while i > 0 && t < self.stops[i] {
                i -= 1;
            }
            while i < last && t >= self.stops[i + 1] {
                i += 1;
            }
            return i;
        }

        self.stops
            .partition_point(|&s| s <= t)
            .saturating_sub(1)
            .min(last)
    }
}

fn decode_all<S: AsRef<str>>(colors: &[S]) -> Result<Vec<Color>, GradientError> {
    Ok(colors
        .iter()
        .map(|hex| Color::from_hex(hex.as_ref()))
        .collect::<Result<Vec<_>, _>>()?)
}

fn validate_stops(stops: &[f64], n: usize) -> Result<(), ConfigError> {
    if stops.len() != n {
        return Err(ConfigError::StopCountMismatch {
            colors: n,
            stops: stops.len(),
        });
    }
    if let Some(index) = stops.iter().position(|s| !s.is_finite()) {
        return Err(ConfigError::NonFiniteStop { index });
    }
    if stops[0] != 0.0 {
        return Err(ConfigError::FirstStopNotZero(stops[0]));
    }
    if stops[n - 1] != 1.0 {
        return Err(ConfigError::LastStopNotOne(stops[n - 1]));
    }
    for (index, pair) in stops.windows(2).enumerate() {
        let (previous, stop) = (pair[0], pair[1]);
        if stop < previous {
            return Err(ConfigError::NonMonotonicStops {
                index: index + 1,
                previous,
                stop,
            });
        }
        if stop == previous {
            return Err(ConfigError::DuplicateStop {
                index: index + 1,
                stop,
            });
        }
    }
    Ok(())
}
