//! SVG parsing and rasterization for the wordmark
//!
//! Serializes a [`goc_wordmark::Node`] tree to markup, then hands it to
//! `usvg` for parsing and `resvg` for rasterization.
//!
//! # Example
//!
//! ```ignore
//! use goc_wordmark::{Attributes, WORDMARK};
//! use goc_wordmark_svg::RasterizedWordmark;
//!
//! let node = WORDMARK.standard(Attributes::new().attr("role", "img"));
//! let image = RasterizedWordmark::from_node(&node, 286, 70)?;
//! image.save_png("wordmark.png")?;
//! ```

mod document;
mod error;
mod rasterize;

pub use document::WordmarkDocument;
pub use error::SvgError;
pub use rasterize::RasterizedWordmark;
