//! Error types for the export crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while writing a crease pattern to a vector format.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The pattern has no segments, so no bounding box exists.
    #[error("Cannot export an empty pattern")]
    EmptyPattern,

    /// The DXF writer rejected the drawing.
    #[error("DXF error: {0}")]
    Dxf(String),

    /// I/O error while writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<::dxf::DxfError> for ExportError {
    fn from(err: ::dxf::DxfError) -> Self {
        Self::Dxf(err.to_string())
    }
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
