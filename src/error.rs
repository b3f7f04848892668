//! Parameter validation errors
//!
//! Engines reject bad parameters at create/reset time so that `step` never
//! has to deal with NaN or infinite inputs.

use std::fmt;

/// Errors raised when applying parameters to an engine
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Parameter is non-finite or outside its domain (e.g. negative length)
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
    /// Geometry is degenerate (zero-length rod, container that can't hold the ball)
    Domain { reason: String },
    /// Settings could not be parsed
    Config(String),
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, value: f32, reason: &'static str) -> Self {
        SimError::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    pub(crate) fn domain(reason: impl Into<String>) -> Self {
        SimError::Domain {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidParameter {
                name,
                value,
                reason,
            } => write!(f, "invalid parameter `{}` = {}: {}", name, value, reason),
            SimError::Domain { reason } => write!(f, "degenerate geometry: {}", reason),
            SimError::Config(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

/// Reject NaN and infinities
pub(crate) fn require_finite(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::invalid(name, value, "must be finite"))
    }
}

/// Reject non-finite and negative values (zero is allowed)
pub(crate) fn require_non_negative(name: &'static str, value: f32) -> Result<f32> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(SimError::invalid(name, value, "must not be negative"));
    }
    Ok(value)
}
