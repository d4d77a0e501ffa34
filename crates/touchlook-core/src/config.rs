//! Configuration for the multitouch look controls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TouchLookError};

/// Allowed movement along one world axis, relative to an anchor position.
///
/// Written as a string in host attributes: one number `r` means
/// `[anchor - r, anchor + r]`, two numbers `a b` mean `[anchor + a, anchor + b]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AxisRange {
    /// Equal reach on both sides of the anchor.
    Symmetric(f32),
    /// Explicit signed offsets from the anchor, lower first.
    Offset(f32, f32),
}

impl AxisRange {
    /// Returns the `(min, max)` interval around `anchor`.
    #[must_use]
    pub fn interval(self, anchor: f32) -> (f32, f32) {
        match self {
            AxisRange::Symmetric(r) => (anchor - r, anchor + r),
            AxisRange::Offset(lo, hi) => (anchor + lo, anchor + hi),
        }
    }

    /// Checks that the range describes a non-empty, finite interval.
    pub fn validate(self) -> Result<()> {
        let invalid = |reason: &str| TouchLookError::InvalidRange {
            value: self.to_string(),
            reason: reason.to_string(),
        };
        match self {
            AxisRange::Symmetric(r) => {
                if !r.is_finite() {
                    return Err(invalid("number must be finite"));
                }
                if r < 0.0 {
                    return Err(invalid("radius must not be negative"));
                }
            }
            AxisRange::Offset(lo, hi) => {
                if !lo.is_finite() || !hi.is_finite() {
                    return Err(invalid("numbers must be finite"));
                }
                if lo > hi {
                    return Err(invalid("lower offset is above upper offset"));
                }
            }
        }
        Ok(())
    }
}

fn parse_number(value: &str, token: &str) -> Result<f32> {
    token
        .parse::<f32>()
        .map_err(|source| TouchLookError::InvalidRangeNumber {
            value: value.to_string(),
            source,
        })
}

impl FromStr for AxisRange {
    type Err = TouchLookError;

    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let range = match tokens.as_slice() {
            [r] => AxisRange::Symmetric(parse_number(s, r)?),
            [lo, hi] => AxisRange::Offset(parse_number(s, lo)?, parse_number(s, hi)?),
            [] => {
                return Err(TouchLookError::InvalidRange {
                    value: s.to_string(),
                    reason: "expected one or two numbers, got none".to_string(),
                })
            }
            _ => {
                return Err(TouchLookError::InvalidRange {
                    value: s.to_string(),
                    reason: format!("expected one or two numbers, got {}", tokens.len()),
                })
            }
        };
        range.validate()?;
        Ok(range)
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRange::Symmetric(r) => write!(f, "{r}"),
            AxisRange::Offset(lo, hi) => write!(f, "{lo} {hi}"),
        }
    }
}

impl TryFrom<String> for AxisRange {
    type Error = TouchLookError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<AxisRange> for String {
    fn from(range: AxisRange) -> Self {
        range.to_string()
    }
}

/// Pitch clamp in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchLimits {
    /// Lowest allowed pitch.
    pub min: f32,
    /// Highest allowed pitch.
    pub max: f32,
}

impl PitchLimits {
    /// Creates limits from degrees.
    #[must_use]
    pub fn from_degrees(min: f32, max: f32) -> Self {
        Self {
            min: min.to_radians(),
            max: max.to_radians(),
        }
    }

    /// Clamps a pitch angle (radians) into the limits.
    #[must_use]
    pub fn clamp(self, pitch: f32) -> f32 {
        pitch.max(self.min).min(self.max)
    }

    /// Returns whether `pitch` lies within the limits.
    #[must_use]
    pub fn contains(self, pitch: f32) -> bool {
        pitch >= self.min && pitch <= self.max
    }
}

/// Configuration of the multitouch look controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LookConfig {
    /// Whether the controls react to touch input.
    pub enabled: bool,

    /// Highest pitch in degrees.
    pub max_pitch: f32,

    /// Lowest pitch in degrees.
    pub min_pitch: f32,

    /// Allowed movement along world X.
    pub xrange: AxisRange,

    /// Allowed movement along world Y.
    pub yrange: AxisRange,

    /// Allowed movement along world Z.
    pub zrange: AxisRange,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_pitch: 15.0,
            min_pitch: -20.0,
            xrange: AxisRange::Symmetric(5.0),
            yrange: AxisRange::Offset(-1.0, 1.0),
            zrange: AxisRange::Symmetric(5.0),
        }
    }
}

impl LookConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with the properties of a host attribute string applied.
    ///
    /// The string has the form `"enabled: true; maxPitch: 10; xrange: -2 3"`.
    /// Properties that are not mentioned keep their current values.
    pub fn merged(&self, attributes: &str) -> Result<Self> {
        let mut config = self.clone();
        for declaration in attributes.split(';') {
            let declaration = declaration.trim();
            if declaration.is_empty() {
                continue;
            }
            let Some((property, value)) = declaration.split_once(':') else {
                return Err(TouchLookError::InvalidProperty {
                    property: declaration.to_string(),
                    value: String::new(),
                });
            };
            let (property, value) = (property.trim(), value.trim());
            let invalid = || TouchLookError::InvalidProperty {
                property: property.to_string(),
                value: value.to_string(),
            };
            match property {
                "enabled" => config.enabled = value.parse().map_err(|_| invalid())?,
                "maxPitch" => config.max_pitch = value.parse().map_err(|_| invalid())?,
                "minPitch" => config.min_pitch = value.parse().map_err(|_| invalid())?,
                "xrange" => config.xrange = value.parse()?,
                "yrange" => config.yrange = value.parse()?,
                "zrange" => config.zrange = value.parse()?,
                other => return Err(TouchLookError::UnknownProperty(other.to_string())),
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Checks pitch limits and ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.min_pitch.is_finite()
            || !self.max_pitch.is_finite()
            || self.min_pitch > self.max_pitch
        {
            return Err(TouchLookError::InvalidPitchLimits {
                min: self.min_pitch,
                max: self.max_pitch,
            });
        }
        self.xrange.validate()?;
        self.yrange.validate()?;
        self.zrange.validate()
    }

    /// Returns the pitch limits in radians.
    #[must_use]
    pub fn pitch_limits(&self) -> PitchLimits {
        PitchLimits::from_degrees(self.min_pitch, self.max_pitch)
    }

    /// Returns whether any field that shapes the bounds or the pitch clamp differs.
    #[must_use]
    pub fn limits_differ(&self, other: &Self) -> bool {
        self.max_pitch != other.max_pitch
            || self.min_pitch != other.min_pitch
            || self.xrange != other.xrange
            || self.yrange != other.yrange
            || self.zrange != other.zrange
    }

    /// Sets whether the controls are enabled.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the pitch limits in degrees.
    #[must_use]
    pub fn with_pitch_range(mut self, min: f32, max: f32) -> Self {
        self.min_pitch = min;
        self.max_pitch = max;
        self
    }

    /// Sets the X range.
    #[must_use]
    pub fn with_xrange(mut self, range: AxisRange) -> Self {
        self.xrange = range;
        self
    }

    /// Sets the Y range.
    #[must_use]
    pub fn with_yrange(mut self, range: AxisRange) -> Self {
        self.yrange = range;
        self
    }

    /// Sets the Z range.
    #[must_use]
    pub fn with_zrange(mut self, range: AxisRange) -> Self {
        self.zrange = range;
        self
    }
}

impl FromStr for LookConfig {
    type Err = TouchLookError;

    fn from_str(s: &str) -> Result<Self> {
        Self::default().merged(s)
    }
}
