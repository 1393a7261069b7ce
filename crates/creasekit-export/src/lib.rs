//! CreaseKit Export Crate
//!
//! Writes generated crease patterns to SVG for viewing and plotting, and to
//! DXF for CAD and cutting tools. Both exporters accept any
//! [`creasekit_core::CreasePattern`].

pub mod dxf;
pub mod error;
pub mod svg;

pub use self::dxf::{aci_color, DxfExporter, DxfOptions};
pub use error::{ExportError, ExportResult};
pub use svg::{dash_array, SvgExporter, SvgOptions};
