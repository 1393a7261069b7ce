//! # CreaseKit Core
//!
//! Shared data model for the CreaseKit workspace:
//!
//! - **Segments**: points, strokes, stroke roles, dash styles and bounds
//! - **Style**: the resolved [`StyleConfig`] every generator receives
//! - **Patterns**: the [`CreasePattern`] and [`PatternGenerator`] seams
//! - **Errors**: parameter and geometry error taxonomy

pub mod error;
pub mod pattern;
pub mod segment;
pub mod style;

pub use error::{
    GeometryError, GeometryResult, ParameterError, ParameterResult, PatternError, PatternResult,
};
pub use pattern::{CreasePattern, PatternGenerator, PatternKind, Provenance};
pub use segment::{Bounds, DashStyle, Point, Segment, Stroke, StrokeRole};
pub use style::{StyleConfig, DEFAULT_ROUNDING_DECIMAL, MAX_ROUNDING_DECIMAL};
