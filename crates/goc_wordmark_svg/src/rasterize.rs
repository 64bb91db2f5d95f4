//! Wordmark rasterization using resvg
//!
//! Produces anti-aliased RGBA pixels with straight alpha, ready for texture
//! upload or PNG export.

use std::path::Path;

use goc_wordmark::Node;
use tiny_skia::{Color, ColorU8, Pixmap, Transform};
use tracing::debug;
use usvg::Tree;

use crate::document::WordmarkDocument;
use crate::error::SvgError;

/// Rasterized wordmark image data
pub struct RasterizedWordmark {
    /// RGBA pixel data (straight alpha)
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RasterizedWordmark {
    /// Rasterize a rendered node tree to the specified size
    ///
    /// The graphic is scaled to fit within the given dimensions while
    /// maintaining aspect ratio, centered within the bounds.
    pub fn from_node(node: &Node, width: u32, height: u32) -> Result<Self, SvgError> {
        check_dimensions(width, height)?;
        let doc = WordmarkDocument::from_node(node)?;
        Self::from_tree(doc.tree(), width, height)
    }

    /// Rasterize serialized markup
    pub fn from_str(svg_str: &str, width: u32, height: u32) -> Result<Self, SvgError> {
        check_dimensions(width, height)?;
        let doc = WordmarkDocument::from_str(svg_str)?;
        Self::from_tree(doc.tree(), width, height)
    }

    /// Rasterize a parsed usvg Tree
    pub fn from_tree(tree: &Tree, width: u32, height: u32) -> Result<Self, SvgError> {
        check_dimensions(width, height)?;

        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| SvgError::Render("Failed to create pixmap".into()))?;

        let svg_size = tree.size();
        let scale_x = width as f32 / svg_size.width();
        let scale_y = height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        let offset_x = (width as f32 - svg_size.width() * scale) / 2.0;
        let offset_y = (height as f32 - svg_size.height() * scale) / 2.0;

        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(tree, transform, &mut pixmap.as_mut());

        debug!(width, height, scale, "rasterized wordmark");

        Ok(Self {
            pixels: unpremultiply_alpha(pixmap.data()),
            width,
            height,
        })
    }

    /// Replace the colour of every visible pixel, keeping its coverage
    ///
    /// The resulting alpha is the original alpha times the tint's alpha.
    pub fn apply_tint(&mut self, tint: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            let alpha = chunk[3] as f32 / 255.0;
            if alpha > 0.0 {
                chunk[0] = (tint.red() * 255.0).round().clamp(0.0, 255.0) as u8;
                chunk[1] = (tint.green() * 255.0).round().clamp(0.0, 255.0) as u8;
                chunk[2] = (tint.blue() * 255.0).round().clamp(0.0, 255.0) as u8;
                chunk[3] = (alpha * tint.alpha() * 255.0).round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    /// Encode as PNG and write to `path`
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), SvgError> {
        let png = self.encode_png()?;
        std::fs::write(path, png)?;
        Ok(())
    }

    /// Encode as PNG in memory
    pub fn encode_png(&self) -> Result<Vec<u8>, SvgError> {
        let mut pixmap = Pixmap::new(self.width, self.height)
            .ok_or_else(|| SvgError::Render("Failed to create pixmap".into()))?;

        for (dst, src) in pixmap
            .pixels_mut()
            .iter_mut()
            .zip(self.pixels.chunks_exact(4))
        {
            *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
        }

        pixmap
            .encode_png()
            .map_err(|e| SvgError::Render(e.to_string()))
    }

    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), SvgError> {
    if width == 0 || height == 0 {
        return Err(SvgError::Render(
            "Invalid dimensions: width and height must be > 0".into(),
        ));
    }
    Ok(())
}

/// Convert premultiplied alpha to straight alpha
fn unpremultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());

    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            let r = (chunk[0] as f32 / a).min(255.0) as u8;
            let g = (chunk[1] as f32 / a).min(255.0) as u8;
            let b = (chunk[2] as f32 / a).min(255.0) as u8;
            result.extend_from_slice(&[r, g, b, chunk[3]]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use goc_wordmark::{Attributes, WORDMARK};

    fn wordmark() -> Node {
        WORDMARK.standard(Attributes::new().attr("role", "img"))
    }

    #[test]
    fn test_rasterize_wordmark() {
        let image = RasterizedWordmark::from_node(&wordmark(), 286, 70).unwrap();
        assert_eq!(image.dimensions(), (286, 70));
        assert_eq!(image.data().len(), 286 * 70 * 4);
        assert!(image.pixels.chunks_exact(4).any(|px| px[3] > 0));
    }

    #[test]
    fn test_fill_attribute_is_honoured() {
        let node = (WORDMARK.svg)(
            Attributes::new(),
            vec![(WORDMARK.flag)(Attributes::new().attr("fill", "#ff0000"))],
        );
        let image = RasterizedWordmark::from_node(&node, 143, 35).unwrap();

        let opaque = image
            .pixels
            .chunks_exact(4)
            .find(|px| px[3] == 255)
            .expect("flag should cover some pixels");
        assert_eq!(&opaque[..3], &[255, 0, 0]);
    }

    #[test]
    fn test_tint() {
        let mut image = RasterizedWordmark::from_node(&wordmark(), 143, 35).unwrap();
        let tint = Color::from_rgba(0.0, 1.0, 0.0, 1.0).unwrap();
        image.apply_tint(tint);

        for px in image.pixels.chunks_exact(4) {
            if px[3] > 0 {
                assert_eq!(&px[..3], &[0, 255, 0]);
            }
        }
    }

    #[test]
    fn test_zero_dimensions_error() {
        assert!(RasterizedWordmark::from_node(&wordmark(), 0, 35).is_err());
        assert!(RasterizedWordmark::from_node(&wordmark(), 143, 0).is_err());
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordmark.png");

        let image = RasterizedWordmark::from_node(&wordmark(), 143, 35).unwrap();
        image.save_png(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
