//! Dash configuration: validated once, read-only afterwards.

use crate::color::Rgba;
use crate::error::{ConfigError, Result};

/// Axis along which dashes repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Dashes run along X; the line is `thickness` tall.
    #[default]
    Horizontal,
    /// Dashes run along Y; the line is `thickness` wide.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A named set of default values for a dash configuration.
///
/// Hosts can define their own sets; the crate ships two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashDefaults {
    /// Dash length.
    pub dash_length: f32,
    /// Gap length.
    pub gap_length: f32,
    /// Stroke thickness.
    pub thickness: f32,
    /// Stroke color.
    pub color: Rgba,
    /// Tiling axis.
    pub orientation: Orientation,
}

impl DashDefaults {
    /// Fine dashes: 4 on, 4 off, 2 thick, opaque mid gray.
    pub const STANDARD: Self = Self {
        dash_length: 4.0,
        gap_length: 4.0,
        thickness: 2.0,
        color: Rgba::MID_GRAY,
        orientation: Orientation::Horizontal,
    };

    /// Coarse dashes from older layouts: 100 on, 100 off, 100 thick, light gray.
    pub const LEGACY: Self = Self {
        dash_length: 100.0,
        gap_length: 100.0,
        thickness: 100.0,
        color: Rgba::LIGHT_GRAY,
        orientation: Orientation::Horizontal,
    };
}

impl Default for DashDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Validated dash configuration.
///
/// A `DashConfig` can only be obtained through validation, so every value of
/// this type satisfies `dash_length > 0`, `gap_length >= 0`, `thickness > 0`
/// and, in particular, `dash_length + gap_length > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashConfig {
    dash_length: f32,
    gap_length: f32,
    thickness: f32,
    color: Rgba,
    orientation: Orientation,
}

impl DashConfig {
    /// Validate and build a configuration.
    pub fn new(
        dash_length: f32,
        gap_length: f32,
        thickness: f32,
        color: Rgba,
        orientation: Orientation,
    ) -> Result<Self> {
        validate(dash_length, gap_length, thickness)?;
        Ok(Self {
            dash_length,
            gap_length,
            thickness,
            color,
            orientation,
        })
    }

    /// Build from a named default set.
    pub fn from_defaults(defaults: DashDefaults) -> Result<Self> {
        DashConfigBuilder::from_defaults(defaults).build()
    }

    /// Start a builder seeded with [`DashDefaults::STANDARD`].
    pub fn builder() -> DashConfigBuilder {
        DashConfigBuilder::default()
    }

    /// Start a builder seeded with this configuration's values.
    pub const fn to_builder(&self) -> DashConfigBuilder {
        DashConfigBuilder {
            dash_length: self.dash_length,
            gap_length: self.gap_length,
            thickness: self.thickness,
            color: self.color,
            orientation: self.orientation,
        }
    }

    /// Length of each visible dash.
    #[inline]
    pub const fn dash_length(&self) -> f32 {
        self.dash_length
    }

    /// Length of the space between dashes.
    #[inline]
    pub const fn gap_length(&self) -> f32 {
        self.gap_length
    }

    /// Stroke thickness, which is also the cross-axis size.
    #[inline]
    pub const fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Stroke color.
    #[inline]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Tiling axis.
    #[inline]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Distance from one dash start to the next. Always positive.
    #[inline]
    pub fn period(&self) -> f32 {
        self.dash_length + self.gap_length
    }

    /// Same configuration along the other axis.
    ///
    /// Orientation has no bearing on validity, so this cannot fail.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Same configuration in a different color.
    #[must_use]
    pub const fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }
}

impl Default for DashConfig {
    fn default() -> Self {
        let d = DashDefaults::STANDARD;
        Self {
            dash_length: d.dash_length,
            gap_length: d.gap_length,
            thickness: d.thickness,
            color: d.color,
            orientation: d.orientation,
        }
    }
}

impl TryFrom<DashDefaults> for DashConfig {
    type Error = ConfigError;

    fn try_from(defaults: DashDefaults) -> Result<Self> {
        Self::from_defaults(defaults)
    }
}

/// Builder for [`DashConfig`]. Nothing is checked until [`build`](Self::build).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashConfigBuilder {
    dash_length: f32,
    gap_length: f32,
    thickness: f32,
    color: Rgba,
    orientation: Orientation,
}

impl DashConfigBuilder {
    /// Seed a builder from a named default set.
    pub const fn from_defaults(defaults: DashDefaults) -> Self {
        Self {
            dash_length: defaults.dash_length,
            gap_length: defaults.gap_length,
            thickness: defaults.thickness,
            color: defaults.color,
            orientation: defaults.orientation,
        }
    }

    /// Set the dash length.
    #[must_use]
    pub const fn dash_length(mut self, dash_length: f32) -> Self {
        self.dash_length = dash_length;
        self
    }

    /// Set the gap length.
    #[must_use]
    pub const fn gap_length(mut self, gap_length: f32) -> Self {
        self.gap_length = gap_length;
        self
    }

    /// Set the stroke thickness.
    #[must_use]
    pub const fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the stroke color.
    #[must_use]
    pub const fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set the tiling axis.
    #[must_use]
    pub const fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<DashConfig> {
        DashConfig::new(
            self.dash_length,
            self.gap_length,
            self.thickness,
            self.color,
            self.orientation,
        )
        .map_err(|e| {
            log::warn!("Rejected dash configuration: {e}");
            e
        })
    }
}

impl Default for DashConfigBuilder {
    fn default() -> Self {
        Self::from_defaults(DashDefaults::STANDARD)
    }
}

fn validate(dash_length: f32, gap_length: f32, thickness: f32) -> Result<()> {
    for (field, value) in [
        ("dash length", dash_length),
        ("gap length", gap_length),
        ("thickness", thickness),
    ] {
        if !value.is_finite() {
            return Err(ConfigError::NonFinite { field, value });
        }
    }

    if dash_length + gap_length <= 0.0 {
        return Err(ConfigError::EmptyPeriod {
            dash_length,
            gap_length,
        });
    }
    if dash_length <= 0.0 {
        return Err(ConfigError::NonPositiveDash(dash_length));
    }
    if gap_length < 0.0 {
        return Err(ConfigError::NegativeGap(gap_length));
    }
    if thickness <= 0.0 {
        return Err(ConfigError::NonPositiveThickness(thickness));
    }
    Ok(())
}
