//! Parameter checks shared by the generators.

use creasekit_core::{ParameterError, ParameterResult};

pub const MIN_SEGMENTS: u32 = 3;
pub const MAX_OMEGA: f64 = 360.0;

pub fn require_radius(radius: f64) -> ParameterResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ParameterError::non_positive("radius", radius));
    }
    Ok(())
}

pub fn require_segments(segments: u32) -> ParameterResult<()> {
    if segments < MIN_SEGMENTS {
        return Err(ParameterError::TooFewSegments { segments });
    }
    Ok(())
}

pub fn require_tiles(tiles: u32) -> ParameterResult<()> {
    if tiles < 1 {
        return Err(ParameterError::OutOfRange {
            name: "tiles".to_string(),
            value: f64::from(tiles),
            min: 1.0,
            max: f64::from(u32::MAX),
        });
    }
    Ok(())
}

/// Omega must lie in `(0, 360]` degrees.
pub fn require_omega(omega: f64) -> ParameterResult<()> {
    if !omega.is_finite() || omega <= 0.0 || omega > MAX_OMEGA {
        return Err(ParameterError::OutOfRange {
            name: "omega".to_string(),
            value: omega,
            min: 0.0,
            max: MAX_OMEGA,
        });
    }
    Ok(())
}

pub fn require_finite(name: &str, value: f64) -> ParameterResult<()> {
    if !value.is_finite() {
        return Err(ParameterError::OutOfRange {
            name: name.to_string(),
            value,
            min: f64::MIN,
            max: f64::MAX,
        });
    }
    Ok(())
}
