//! RGB(A) colors with channels in [0, 1] and their `#RRGGBB[AA]` encoding.

use crate::error::ColorFormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color with red, green, blue and optional alpha channels, each in [0, 1].
///
/// Serializes as its hex string (`"#rrggbb"` or `"#rrggbbaa"`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: Option<f64>,
}

/// Clamp a channel into [0, 1], mapping NaN to 0.
fn unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Scale a [0, 1] channel to a byte, rounding half away from zero.
fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Color {
    /// Opaque color without an alpha channel. Channels are clamped into [0, 1].
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: None,
        }
    }

    /// Color with an explicit alpha channel. Channels are clamped into [0, 1].
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            a: Some(unit(a)),
            ..Self::rgb(r, g, b)
        }
    }

    /// Decode `#RRGGBB` or `#RRGGBBAA` (hex digits in either case).
    pub fn from_hex(hex: &str) -> Result<Self, ColorFormatError> {
        let bytes = hex.as_bytes();
        if bytes.first() != Some(&b'#') {
            return Err(ColorFormatError::MissingPrefix(hex.to_string()));
        }
        let len = bytes.len();
        if len != 7 && len != 9 {
            return Err(ColorFormatError::InvalidLength {
                input: hex.to_string(),
                len,
            });
        }

        let mut channels = [0.0; 4];
        for (i, pair) in bytes[1..].chunks(2).enumerate() {
            let mut value = 0u32;
            for (j, &byte) in pair.iter().enumerate() {
                let digit = (byte as char).to_digit(16).ok_or_else(|| {
                    ColorFormatError::InvalidDigit {
                        input: hex.to_string(),
                        position: 1 + 2 * i + j,
                    }
                })?;
                value = value * 16 + digit;
            }
            channels[i] = value as f64 / 255.0;
        }

        let [r, g, b, a] = channels;
        Ok(Self {
            r,
            g,
            b,
            a: (len == 9).then_some(a),
        })
    }

    /// Encode as lowercase `#rrggbb`, or `#rrggbbaa` when alpha is present.
    pub fn to_hex(&self) -> String {
        let mut hex = format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        );
        if let Some(a) = self.a {
            hex.push_str(&format!("{:02x}", to_byte(a)));
        }
        hex
    }

    /// RGBA bytes; alpha is 255 when the color has no alpha channel.
    pub fn to_bytes(&self) -> [u8; 4] {
        [
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b),
            self.a.map_or(255, to_byte),
        ]
    }

    /// Raw channel values: 3 entries, or 4 when alpha is present.
    pub fn channels(&self) -> Vec<f64> {
        let mut channels = vec![self.r, self.g, self.b];
        channels.extend(self.a);
        channels
    }

    pub fn channel_count(&self) -> usize {
        if self.a.is_some() {
            4
        } else {
            3
        }
    }

    pub fn has_alpha(&self) -> bool {
        self.a.is_some()
    }

    pub fn alpha(&self) -> Option<f64> {
        self.a
    }

    /// Weighted channel-wise sum `wa * self + wb * other`.
    ///
    /// Alpha is kept only when both colors carry it.
    pub fn mix(&self, other: &Color, wa: f64, wb: f64) -> Color {
        Color {
            r: wa * self.r + wb * other.r,
            g: wa * self.g + wb * other.g,
            b: wa * self.b + wb * other.b,
            a: self.a.zip(other.a).map(|(x, y)| wa * x + wb * y),
        }
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rgb_channels() {
        let c = Color::from_hex("#ff8000").unwrap();
        assert_eq!(c.channels(), vec![1.0, 128.0 / 255.0, 0.0]);
        assert!(!c.has_alpha());
    }

    #[test]
    fn decodes_rgba_and_mixed_case() {
        let c = Color::from_hex("#FfFfFf80").unwrap();
        assert_eq!(c.channel_count(), 4);
        assert_eq!(c.alpha(), Some(128.0 / 255.0));
        assert_eq!(c.to_hex(), "#ffffff80");
    }

    #[test]
    fn rejects_missing_prefix() {
        assert_eq!(
            Color::from_hex("ffffff"),
            Err(ColorFormatError::MissingPrefix("ffffff".to_string()))
        );
        assert!(matches!(
            Color::from_hex(""),
            Err(ColorFormatError::MissingPrefix(_))
        ));
    }

    #[test]
    fn rejects_short_and_long_strings() {
        for hex in ["#fff", "#fffffff", "#fffffffff0"] {
            assert!(
                matches!(
                    Color::from_hex(hex),
                    Err(ColorFormatError::InvalidLength { .. })
                ),
                "{hex} should be rejected"
            );
        }
    }

    #[test]
    fn reports_position_of_bad_digit() {
        assert_eq!(
            Color::from_hex("#12g456"),
            Err(ColorFormatError::InvalidDigit {
                input: "#12g456".to_string(),
                position: 3,
            })
        );
    }

    #[test]
    fn non_ascii_input_is_an_error_not_a_panic() {
        // 'é' is two bytes, so this has byte length 7
        assert!(matches!(
            Color::from_hex("#fféff"),
            Err(ColorFormatError::InvalidDigit { position: 3, .. })
        ));
    }

    #[test]
    fn encoding_rounds_half_away_from_zero() {
        assert_eq!(Color::rgb(0.5, 0.5, 0.5).to_hex(), "#808080");
        assert_eq!(Color::rgb(0.0, 1.0, 0.0).to_hex(), "#00ff00");
    }

    #[test]
    fn hex_round_trip_within_one_step() {
        let samples = [0.0, 0.001, 0.1234, 0.333, 0.5, 0.75, 0.9999, 1.0];
        for &v in &samples {
            let c = Color::rgba(v, 1.0 - v, v * 0.5, v);
            let back = Color::from_hex(&c.to_hex()).unwrap();
            for (x, y) in c.channels().iter().zip(back.channels()) {
                assert!((x - y).abs() <= 1.0 / 255.0, "{x} vs {y}");
            }
        }
    }

    #[test]
    fn constructors_clamp_channels() {
        let c = Color::rgba(-0.5, 2.0, f64::NAN, 1.5);
        assert_eq!(c.channels(), vec![0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn mix_blends_alpha_only_when_both_have_it() {
        let a = Color::rgba(0.0, 0.0, 0.0, 0.0);
        let b = Color::rgba(1.0, 1.0, 1.0, 1.0);
        assert_eq!(a.mix(&b, 0.25, 0.75).channels(), vec![0.75; 4]);

        let opaque = Color::rgb(1.0, 1.0, 1.0);
        assert!(!a.mix(&opaque, 0.5, 0.5).has_alpha());
    }

    #[test]
    fn serializes_as_hex_string() {
        let c = Color::rgb(1.0, 0.0, 0.0);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ff0000\"");
        let back: Color = serde_json::from_str("\"#00FF00\"").unwrap();
        assert_eq!(back, Color::rgb(0.0, 1.0, 0.0));
        assert!(serde_json::from_str::<Color>("\"00ff00\"").is_err());
    }

    #[test]
    fn bytes_default_to_opaque() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.0).to_bytes(), [255, 0, 0, 255]);
        assert_eq!(
            Color::from_hex("#01020304").unwrap().to_bytes(),
            [1, 2, 3, 4]
        );
    }
}
