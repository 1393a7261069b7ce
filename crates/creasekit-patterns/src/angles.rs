//! Angle and length relations used by every pattern generator.
//!
//! Scalar helpers take and return degrees, matching the design inputs.
//! [`DomeGeometry`] keeps its sequences in radians because the dome walk
//! consumes them directly; its `Display` impl renders degrees.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use creasekit_core::{GeometryError, GeometryResult, ParameterError, PatternResult};
use serde::{Deserialize, Serialize};

/// Angle subtended by one of `n` segments spanning `omega` degrees.
pub fn segment_angle(omega: f64, n: u32) -> f64 {
    omega / f64::from(n)
}

/// Chord length of a segment subtending `theta` degrees on radius `r`.
pub fn segment_length(r: f64, theta: f64) -> f64 {
    2.0 * r * (theta / 2.0).to_radians().sin()
}

/// Folding angle in degrees for a segment angle of `theta` degrees.
///
/// Goes through the supplementary angle in radians and back; the result is
/// `theta / 2` up to floating point noise, which later comparisons see.
pub fn folding_angle(theta: f64) -> f64 {
    let beta = PI - theta.to_radians();
    ((PI - beta) / 2.0).to_degrees()
}

/// Largest fold height for chord `s` and folding angle `alpha` degrees.
pub fn max_height(s: f64, alpha: f64) -> f64 {
    alpha.to_radians().tan() * (s / 2.0)
}

fn checked_asin(argument: f64) -> GeometryResult<f64> {
    if !(-1.0..=1.0).contains(&argument) {
        return Err(GeometryError::domain("asin", argument));
    }
    Ok(argument.asin())
}

fn checked_acos(argument: f64) -> GeometryResult<f64> {
    if !(-1.0..=1.0).contains(&argument) {
        return Err(GeometryError::domain("acos", argument));
    }
    Ok(argument.acos())
}

fn finite(quantity: &str, value: f64) -> GeometryResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::non_finite(quantity, value))
    }
}

/// `acos(a / 2r) / 2n` in degrees.
pub fn double_vault_alpha1(a: f64, r: f64, n: u32) -> GeometryResult<f64> {
    let inv = checked_acos(a / (2.0 * r))?;
    finite("alpha1", (inv / (2.0 * f64::from(n))).to_degrees())
}

/// `2·acos(a / 2r) − acos(a / 2r) / n` in degrees.
pub fn double_vault_beta(a: f64, r: f64, n: u32) -> GeometryResult<f64> {
    let inv = checked_acos(a / (2.0 * r))?;
    finite("beta", (2.0 * inv - inv / f64::from(n)).to_degrees())
}

pub fn double_vault_alpha2(beta: f64) -> f64 {
    (90.0 - beta) / 2.0
}

/// Primary and secondary folding angle at one dome vertex, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoldingAnglePair {
    pub primary: f64,
    pub secondary: f64,
}

/// Everything derived from a dome's radius and segment count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomeGeometry {
    pub radius: f64,
    pub segments: u32,
    /// Segment angles, an increasing arithmetic sequence.
    pub thetas: Vec<f64>,
    /// Chord length per segment.
    pub lengths: Vec<f64>,
    /// Half angles `π/2 − θ/2`.
    pub half_angles: Vec<f64>,
    /// Sums of neighbouring half angles, `n − 1` entries.
    pub betas: Vec<f64>,
    /// Chords spanning two neighbouring segments, `n − 1` entries.
    pub spans: Vec<f64>,
    /// `n − 1` interior pairs followed by the trailing pair.
    pub folding_angles: Vec<FoldingAnglePair>,
    /// Fold heights, the last one closing the wedge.
    pub heights: Vec<f64>,
    pub theta_first: f64,
    pub theta_last: f64,
    pub common_difference: f64,
    pub alpha_11: f64,
    /// Number of wedges covering the full circle.
    pub radial_segments: u32,
}

impl DomeGeometry {
    pub fn trailing_pair(&self) -> FoldingAnglePair {
        // derive_dome_geometry always pushes the trailing pair
        self.folding_angles[self.folding_angles.len() - 1]
    }

    pub fn closing_height(&self) -> f64 {
        self.heights[self.heights.len() - 1]
    }

    /// Angle between consecutive wedge copies.
    pub fn wedge_angle(&self) -> f64 {
        2.0 * self.alpha_11
    }
}

/// Derive the dome recurrences for radius `r` and `n` segments.
///
/// Fewer than three segments leave no interior pair to close the wedge with
/// and are rejected before anything is computed.
pub fn derive_dome_geometry(r: f64, n: u32) -> PatternResult<DomeGeometry> {
    if n < 3 {
        return Err(ParameterError::TooFewSegments { segments: n }.into());
    }
    if !r.is_finite() || r <= 0.0 {
        return Err(ParameterError::non_positive("radius", r).into());
    }

    let count = n as usize;
    let nf = f64::from(n);

    let theta_first = (180.0 / (nf * (nf + 1.0))).to_radians();
    let theta_last = PI / nf - theta_first;
    let common_difference = (theta_last - theta_first) / (nf - 1.0);

    let thetas: Vec<f64> = (0..count)
        .map(|i| theta_first + i as f64 * common_difference)
        .collect();
    let lengths: Vec<f64> = thetas.iter().map(|t| 2.0 * r * (t / 2.0).sin()).collect();
    let half_angles: Vec<f64> = thetas.iter().map(|t| FRAC_PI_2 - t / 2.0).collect();

    let betas: Vec<f64> = half_angles.windows(2).map(|w| w[0] + w[1]).collect();
    let spans: Vec<f64> = thetas
        .windows(2)
        .map(|w| 2.0 * r * ((PI - (w[0] + w[1])) / 2.0).cos())
        .collect();

    let mut folding_angles = Vec::with_capacity(count);
    for i in 0..count - 1 {
        let sin_beta = betas[i].sin();
        folding_angles.push(FoldingAnglePair {
            primary: checked_asin(sin_beta * lengths[i + 1] / spans[i])?,
            secondary: checked_asin(sin_beta * lengths[i] / spans[i])?,
        });
    }

    let mut heights: Vec<f64> = (0..count - 1)
        .map(|i| lengths[i] * folding_angles[i].primary.sin())
        .collect();

    let alpha_last1 = PI - (betas[count - 2] + folding_angles[count - 3].secondary);
    let alpha_last2 = FRAC_PI_2 - alpha_last1;
    heights.push(lengths[count - 1] * alpha_last1.sin());
    folding_angles.push(FoldingAnglePair {
        primary: alpha_last1,
        secondary: alpha_last2,
    });

    let alpha_11 = folding_angles[0].primary;
    let wedges = finite("radial_segments", (360.0 / alpha_11.to_degrees()).round())?;
    if wedges < 1.0 {
        return Err(GeometryError::non_finite("radial_segments", wedges).into());
    }

    Ok(DomeGeometry {
        radius: r,
        segments: n,
        thetas,
        lengths,
        half_angles,
        betas,
        spans,
        folding_angles,
        heights,
        theta_first,
        theta_last,
        common_difference,
        alpha_11,
        radial_segments: wedges as u32,
    })
}

fn write_degrees(f: &mut fmt::Formatter<'_>, label: &str, values: &[f64]) -> fmt::Result {
    let joined: Vec<String> = values
        .iter()
        .map(|v| format!("{:.4}", v.to_degrees()))
        .collect();
    writeln!(f, "{label}: [{}]", joined.join(", "))
}

impl fmt::Display for DomeGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Radius: {:.4}", self.radius)?;
        writeln!(f, "Segments: {}", self.segments)?;
        writeln!(f, "θ1: {:.4}°", self.theta_first.to_degrees())?;
        writeln!(f, "θl: {:.4}°", self.theta_last.to_degrees())?;
        writeln!(
            f,
            "Common difference: {:.4}°",
            self.common_difference.to_degrees()
        )?;
        writeln!(f, "α11: {:.4}°", self.alpha_11.to_degrees())?;
        writeln!(f, "Radial segments: {}", self.radial_segments)?;
        write_degrees(f, "θ", &self.thetas)?;
        let lengths: Vec<String> = self.lengths.iter().map(|s| format!("{s:.4}")).collect();
        writeln!(f, "s: [{}]", lengths.join(", "))?;
        write_degrees(f, "β", &self.betas)?;
        let pairs: Vec<String> = self
            .folding_angles
            .iter()
            .map(|p| {
                format!(
                    "({:.4}, {:.4})",
                    p.primary.to_degrees(),
                    p.secondary.to_degrees()
                )
            })
            .collect();
        writeln!(f, "α: [{}]", pairs.join(", "))?;
        let heights: Vec<String> = self.heights.iter().map(|h| format!("{h:.4}")).collect();
        write!(f, "h: [{}]", heights.join(", "))
    }
}
