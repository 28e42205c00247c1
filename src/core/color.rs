use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// RGBA color written to the native tree as a CSS string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("silver", (192, 192, 192)),
    ("cyan", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
];

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::InvalidColor(format!(
                "alpha must be finite and in [0, 1], got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)` or a named color.
    pub fn parse(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();
        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ChartError::InvalidColor(input.to_owned()));
        }
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            let body = body
                .strip_suffix(')')
                .ok_or_else(|| ChartError::InvalidColor(input.to_owned()))?;
            return parse_rgb_function(body).ok_or_else(|| ChartError::InvalidColor(input.to_owned()));
        }
        if lower == "transparent" {
            return Ok(Self::TRANSPARENT);
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, (r, g, b))| Self::rgb(*r, *g, *b))
            .ok_or_else(|| ChartError::InvalidColor(input.to_owned()))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    #[must_use]
    pub fn to_rgba_string(self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let channel = |pair: &str| u8::from_str_radix(pair, 16).ok();
    match hex.len() {
        3 => {
            let mut expanded = [0u8; 3];
            for (slot, ch) in expanded.iter_mut().zip(hex.chars()) {
                let digit = u8::try_from(ch.to_digit(16)?).ok()?;
                *slot = digit * 17;
            }
            Some(Color::rgb(expanded[0], expanded[1], expanded[2]))
        }
        6 | 8 => {
            let red = channel(hex.get(0..2)?)?;
            let green = channel(hex.get(2..4)?)?;
            let blue = channel(hex.get(4..6)?)?;
            let alpha = match hex.get(6..8) {
                Some(pair) => f64::from(channel(pair)?) / 255.0,
                None => 1.0,
            };
            Some(Color::rgba(red, green, blue, alpha))
        }
        _ => None,
    }
}

fn parse_rgb_function(body: &str) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |part: &str| -> Option<u8> {
        let value: f64 = part.parse().ok()?;
        (value.is_finite() && (0.0..=255.0).contains(&value)).then(|| value.round() as u8)
    };
    let alpha = match parts.get(3) {
        Some(part) => {
            let value: f64 = part.parse().ok()?;
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return None;
            }
            value
        }
        None => 1.0,
    };
    Some(Color::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha >= 1.0 {
            f.write_str(&self.to_hex())
        } else {
            f.write_str(&self.to_rgba_string())
        }
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Color::parse("#fff").expect("short"), Color::rgb(255, 255, 255));
        assert_eq!(Color::parse("#FF8000").expect("long"), Color::rgb(255, 128, 0));
        let translucent = Color::parse("#00000080").expect("alpha");
        assert!((translucent.alpha - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn parses_rgba_function() {
        let color = Color::parse("rgba(0, 0, 0, 0.1)").expect("rgba");
        assert_eq!(color, Color::rgba(0, 0, 0, 0.1));
        assert_eq!(color.to_string(), "rgba(0,0,0,0.1)");
    }

    #[test]
    fn opaque_colors_display_as_hex() {
        assert_eq!(Color::parse("red").expect("named").to_string(), "#ff0000");
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::parse("#12").is_err());
        assert!(Color::parse("rgb(300,0,0)").is_err());
        assert!(Color::parse("not-a-color").is_err());
    }
}
