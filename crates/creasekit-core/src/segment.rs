//! Line segments and their stroke styling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParameterError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Rotate about the origin by `angle` radians.
    pub fn rotated(&self, angle: f64) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self::new(self.x * cos_a - self.y * sin_a, self.x * sin_a + self.y * cos_a)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Structural role of a crease pattern line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeRole {
    Mountain,
    Valley,
    Cut,
    Connector,
    Guide,
}

impl StrokeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mountain => "mountain",
            Self::Valley => "valley",
            Self::Cut => "cut",
            Self::Connector => "connector",
            Self::Guide => "guide",
        }
    }
}

impl fmt::Display for StrokeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dash pattern of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    #[serde(rename = "dashdot")]
    DashDot,
}

impl DashStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dash => "dash",
            Self::Dot => "dot",
            Self::DashDot => "dashdot",
        }
    }
}

impl fmt::Display for DashStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashStyle {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(Self::Solid),
            "dash" => Ok(Self::Dash),
            "dot" => Ok(Self::Dot),
            "dashdot" => Ok(Self::DashDot),
            other => Err(ParameterError::UnknownDashStyle(other.to_string())),
        }
    }
}

/// Visual attributes shared by every segment drawn in the same role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub role: StrokeRole,
    pub color: String,
    pub width: f64,
    pub dash: DashStyle,
}

impl Stroke {
    pub fn new(role: StrokeRole, color: &str, width: f64, dash: DashStyle) -> Self {
        Self {
            role,
            color: color.to_string(),
            width,
            dash,
        }
    }
}

/// A straight crease pattern line between two points.
///
/// Segments are compared undirected by the deduplicator; `start` and `end`
/// only record the order in which the generator walked them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub stroke: Stroke,
}

impl Segment {
    pub fn new(start: Point, end: Point, stroke: Stroke) -> Self {
        Self { start, end, stroke }
    }

    pub fn role(&self) -> StrokeRole {
        self.stroke.role
    }

    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start, self.stroke.clone())
    }

    /// Copy of this segment rotated about the origin by `angle` radians.
    pub fn rotated(&self, angle: f64) -> Self {
        Self::new(
            self.start.rotated(angle),
            self.end.rotated(angle),
            self.stroke.clone(),
        )
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.start.translated(dx, dy),
            self.end.translated(dx, dy),
            self.stroke.clone(),
        )
    }
}

/// Axis-aligned bounding box over segment endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounding box of every endpoint, or `None` for an empty slice.
    pub fn of_segments(segments: &[Segment]) -> Option<Self> {
        let mut points = segments.iter().flat_map(|s| [s.start, s.end]);
        let first = points.next()?;
        let init = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points.fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Grow each side by `ratio` of the box's own width/height.
    pub fn padded(&self, ratio: f64) -> Self {
        let px = self.width() * ratio;
        let py = self.height() * ratio;
        Self {
            min_x: self.min_x - px,
            min_y: self.min_y - py,
            max_x: self.max_x + px,
            max_y: self.max_y + py,
        }
    }
}
