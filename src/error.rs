//! Error types for dash configuration.

use thiserror::Error;

/// Reasons a dash configuration is rejected.
///
/// Rejection happens when a [`DashConfig`](crate::DashConfig) is built or when a
/// [`DashRenderer`](crate::DashRenderer) is reconfigured. A rejected update leaves
/// the previous configuration in effect.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `dash_length + gap_length` is not positive, so tiling cannot advance.
    #[error("dash period must be positive (dash {dash_length} + gap {gap_length})")]
    EmptyPeriod {
        /// Requested dash length.
        dash_length: f32,
        /// Requested gap length.
        gap_length: f32,
    },

    /// Dash length is zero or negative.
    #[error("dash length must be positive, got {0}")]
    NonPositiveDash(f32),

    /// Gap length is negative.
    #[error("gap length must not be negative, got {0}")]
    NegativeGap(f32),

    /// Stroke thickness is zero or negative.
    #[error("thickness must be positive, got {0}")]
    NonPositiveThickness(f32),

    /// A length or thickness is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
