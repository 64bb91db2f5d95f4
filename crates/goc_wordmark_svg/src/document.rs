//! Parsed wordmark document

use goc_wordmark::Node;
use tracing::debug;
use usvg::{Options, Tree};

use crate::error::SvgError;

/// A wordmark serialized to markup and parsed by `usvg`
#[derive(Clone)]
pub struct WordmarkDocument {
    /// The underlying usvg tree
    tree: Tree,
    /// Size resolved from width/height or the viewBox
    pub width: f32,
    pub height: f32,
}

impl WordmarkDocument {
    /// Serialize a rendered node tree and parse it
    pub fn from_node(node: &Node) -> Result<Self, SvgError> {
        Self::from_str(&node.to_markup())
    }

    /// Parse already-serialized markup
    pub fn from_str(svg_str: &str) -> Result<Self, SvgError> {
        Self::from_data(svg_str.as_bytes())
    }

    /// Parse raw bytes
    pub fn from_data(data: &[u8]) -> Result<Self, SvgError> {
        let options = Options::default();
        let tree = Tree::from_data(data, &options).map_err(|e| SvgError::Parse(e.to_string()))?;

        let size = tree.size();
        debug!(
            width = size.width(),
            height = size.height(),
            "parsed wordmark document"
        );

        Ok(Self {
            tree,
            width: size.width(),
            height: size.height(),
        })
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Number of drawable paths after usvg simplification
    pub fn path_count(&self) -> usize {
        count_paths(self.tree.root())
    }
}

fn count_paths(group: &usvg::Group) -> usize {
    group
        .children()
        .iter()
        .map(|child| match child {
            usvg::Node::Group(g) => count_paths(g),
            usvg::Node::Path(_) => 1,
            usvg::Node::Image(_) | usvg::Node::Text(_) => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use goc_wordmark::{Attributes, WORDMARK};

    #[test]
    fn test_parse_standard_wordmark() {
        let node = WORDMARK.standard(
            Attributes::new()
                .attr("role", "img")
                .attr("aria-label", "Government of Canada"),
        );

        let doc = WordmarkDocument::from_node(&node).unwrap();
        assert_eq!(doc.size(), (143.0, 35.0));
        assert_eq!(doc.path_count(), 2);
    }

    #[test]
    fn test_title_is_not_drawn() {
        let node = WORDMARK.titled(Attributes::new(), "Government of Canada");
        let doc = WordmarkDocument::from_node(&node).unwrap();
        assert_eq!(doc.path_count(), 2);
    }

    #[test]
    fn test_handlers_do_not_reach_markup() {
        let node = (WORDMARK.svg)(
            Attributes::new().on("onClick", |_| {}),
            vec![(WORDMARK.flag)(Attributes::new().on("onMouseOver", |_| {}))],
        );
        let doc = WordmarkDocument::from_node(&node).unwrap();
        assert_eq!(doc.path_count(), 1);
    }

    #[test]
    fn test_invalid_markup() {
        assert!(matches!(
            WordmarkDocument::from_str("<svg"),
            Err(SvgError::Parse(_))
        ));
    }
}
