//! Error types for crease pattern generation.
//!
//! Two failure families are kept apart: caller input that is rejected before
//! any geometry is derived ([`ParameterError`]) and numeric domain violations
//! that only show up for certain combinations of otherwise valid inputs
//! ([`GeometryError`]). [`PatternError`] wraps both.

use thiserror::Error;

/// Errors that can occur while generating a crease pattern.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// A design parameter or style value was rejected.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// A derived quantity left the domain of a trigonometric function.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

/// Errors related to design parameter and style validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Fewer than three segments were requested.
    #[error("At least 3 segments are required, got {segments}")]
    TooFewSegments { segments: u32 },

    /// A value that must be strictly positive was zero, negative or not finite.
    #[error("Parameter '{name}' must be positive and finite, got {value}")]
    NonPositive { name: String, value: f64 },

    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A style configuration value is invalid.
    #[error("Invalid style value for '{key}': {reason}")]
    InvalidStyle { key: String, reason: String },

    /// The dash style token is not one of solid, dash, dot or dashdot.
    #[error("Unknown dash style: {0}")]
    UnknownDashStyle(String),

    /// The pattern name is not one of the supported families.
    #[error("Unknown pattern kind: {0}")]
    UnknownPattern(String),
}

/// Errors raised when a computation leaves its numeric domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An inverse trigonometric function received an argument outside [-1, 1].
    #[error("{operation} argument {argument} is outside [-1, 1]")]
    DomainViolation { operation: String, argument: f64 },

    /// A derived quantity evaluated to NaN or infinity.
    #[error("Derived quantity '{quantity}' is not finite: {value}")]
    NonFinite { quantity: String, value: f64 },
}

impl GeometryError {
    pub fn domain(operation: &str, argument: f64) -> Self {
        Self::DomainViolation {
            operation: operation.to_string(),
            argument,
        }
    }

    pub fn non_finite(quantity: &str, value: f64) -> Self {
        Self::NonFinite {
            quantity: quantity.to_string(),
            value,
        }
    }
}

impl ParameterError {
    pub fn non_positive(name: &str, value: f64) -> Self {
        Self::NonPositive {
            name: name.to_string(),
            value,
        }
    }

    pub fn invalid_style(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidStyle {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for pattern generation.
pub type PatternResult<T> = Result<T, PatternError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Result type alias for derived geometry.
pub type GeometryResult<T> = Result<T, GeometryError>;
