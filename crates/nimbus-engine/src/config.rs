use derive_more::{AsRef, Deref, Display, From, Into};
use palette::{Srgb, Srgba, WithAlpha};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("trailing_speed must be a positive number, got {0}")]
    TrailingSpeed(f64),
    #[error("{field} must be a finite, non-negative length, got {value}")]
    Length { field: &'static str, value: f64 },
    #[error("{field} must be a positive scale factor, got {value}")]
    Scale { field: &'static str, value: f64 },
    #[error("{field} must lie within 0..=1, got {value}")]
    Alpha { field: &'static str, value: f64 },
    #[error("Malformed color '{0}'")]
    Color(String),
    #[error("Marker class '{0}' is not a valid CSS class name")]
    MarkerClass(String),
}

fn malformed(raw: &str) -> ConfigError {
    ConfigError::Color(raw.to_string())
}

/// An `"r, g, b"` channel triple, each channel in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Deref, From, Into, DeserializeFromStr, SerializeDisplay)]
pub struct Channels(Srgb<u8>);

impl Channels {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    pub fn with_alpha(self, alpha: f64) -> Srgba<f64> {
        self.0.into_format::<f64>().with_alpha(alpha)
    }
}

impl FromStr for Channels {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed(s))?;

        match parts.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(malformed(s)),
        }
    }
}

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.red, self.0.green, self.0.blue)
    }
}

/// Accepts `transparent`, `rgb(..)`, `rgba(..)`, `#rrggbb` or a bare triple.
#[derive(Debug, Clone, Copy, PartialEq, Deref, From, Into, DeserializeFromStr, SerializeDisplay)]
pub struct Paint(Srgba<f64>);

impl Paint {
    pub fn transparent() -> Self {
        Self(Srgba::new(0.0, 0.0, 0.0, 0.0))
    }

    pub fn opaque(channels: Channels) -> Self {
        Self(channels.with_alpha(1.0))
    }

    pub fn is_transparent(&self) -> bool {
        self.0.alpha <= 0.0
    }
}

impl FromStr for Paint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        if lower == "transparent" {
            return Ok(Self::transparent());
        }

        if let Some(args) = lower
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let (rgb, alpha) = args.rsplit_once(',').ok_or_else(|| malformed(s))?;
            let alpha = alpha
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|a| (0.0..=1.0).contains(a))
                .ok_or_else(|| malformed(s))?;
            let channels = rgb.parse::<Channels>().map_err(|_| malformed(s))?;
            return Ok(Self(channels.with_alpha(alpha)));
        }

        if let Some(args) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return args
                .parse::<Channels>()
                .map(Self::opaque)
                .map_err(|_| malformed(s));
        }

        if lower.starts_with('#') {
            return Srgb::<u8>::from_str(&lower)
                .map(|rgb| Self::opaque(Channels::from(rgb)))
                .map_err(|_| malformed(s));
        }

        lower
            .parse::<Channels>()
            .map(Self::opaque)
            .map_err(|_| malformed(s))
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_transparent() {
            return f.write_str("transparent");
        }
        let rgb = self.0.color.into_format::<u8>();
        if self.0.alpha >= 1.0 {
            write!(f, "rgb({},{},{})", rgb.red, rgb.green, rgb.blue)
        } else {
            write!(
                f,
                "rgba({},{},{},{})",
                rgb.red, rgb.green, rgb.blue, self.0.alpha
            )
        }
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct MarkerClass(String);

crate::string_newtype!(MarkerClass);

impl Default for MarkerClass {
    fn default() -> Self {
        Self::new("link")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CursorConfig {
    pub color: Channels,
    pub outer_color: Channels,
    pub inner_alpha: f64,
    pub outer_alpha: f64,
    pub inner_border: f64,
    pub inner_border_color: Paint,
    pub outer_border: f64,
    pub outer_border_color: Paint,
    pub inner_size: f64,
    pub inner_scale: f64,
    pub outer_size: f64,
    pub outer_scale: f64,
    pub trailing_speed: f64,
    pub marker_class: MarkerClass,
    pub show_system_cursor: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            color: Channels::new(220, 90, 90),
            outer_color: Channels::new(0, 0, 0),
            inner_alpha: 1.0,
            outer_alpha: 0.0,
            inner_border: 0.0,
            inner_border_color: Paint::transparent(),
            outer_border: 1.0,
            outer_border_color: Paint::opaque(Channels::new(220, 90, 90)),
            inner_size: 8.0,
            inner_scale: 0.7,
            outer_size: 25.0,
            outer_scale: 2.0,
            trailing_speed: 8.0,
            marker_class: MarkerClass::default(),
            show_system_cursor: false,
        }
    }
}

impl CursorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.trailing_speed.is_finite() && self.trailing_speed > 0.0) {
            return Err(ConfigError::TrailingSpeed(self.trailing_speed));
        }

        if let Some((field, value)) = [
            ("inner_size", self.inner_size),
            ("outer_size", self.outer_size),
            ("inner_border", self.inner_border),
            ("outer_border", self.outer_border),
        ]
        .into_iter()
        .find(|(_, v)| !(v.is_finite() && *v >= 0.0))
        {
            return Err(ConfigError::Length { field, value });
        }

        if let Some((field, value)) = [
            ("inner_scale", self.inner_scale),
            ("outer_scale", self.outer_scale),
        ]
        .into_iter()
        .find(|(_, v)| !(v.is_finite() && *v > 0.0))
        {
            return Err(ConfigError::Scale { field, value });
        }

        if let Some((field, value)) = [
            ("inner_alpha", self.inner_alpha),
            ("outer_alpha", self.outer_alpha),
        ]
        .into_iter()
        .find(|(_, v)| !(0.0..=1.0).contains(v))
        {
            return Err(ConfigError::Alpha { field, value });
        }

        let marker = self.marker_class.as_str();
        if marker.is_empty() || marker.chars().any(char::is_whitespace) {
            return Err(ConfigError::MarkerClass(marker.to_string()));
        }

        Ok(())
    }

    pub fn inner_fill(&self) -> Srgba<f64> {
        self.color.with_alpha(self.inner_alpha)
    }

    pub fn outer_fill(&self) -> Srgba<f64> {
        self.outer_color.with_alpha(self.outer_alpha)
    }
}
