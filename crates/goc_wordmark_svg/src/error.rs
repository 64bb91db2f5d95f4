//! SVG error types

use std::io;
use thiserror::Error;

/// Errors that can occur when parsing or rasterizing a wordmark
#[derive(Error, Debug)]
pub enum SvgError {
    /// IO error when writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// SVG parsing error
    #[error("SVG parsing error: {0}")]
    Parse(String),

    /// Rasterization or encoding failure
    #[error("SVG render error: {0}")]
    Render(String),
}
