//! Wordmark components
//!
//! `flag` and `text` each emit one `path` with a fixed descriptor; `svg`
//! emits the wrapping container. All three forward the caller's attribute
//! bag verbatim.
//!
//! ```rust
//! use goc_wordmark::{flag, svg, text, Attributes};
//!
//! let wordmark = svg(
//!     Attributes::new()
//!         .attr("role", "img")
//!         .attr("aria-label", "Government of Canada"),
//!     vec![flag(Attributes::new()), text(Attributes::new())],
//! );
//!
//! assert_eq!(wordmark.children().len(), 2);
//! assert_eq!(wordmark.attr_str("viewBox"), Some("0 0 143 35"));
//! ```

use tracing::trace;

use crate::attributes::Attributes;
use crate::node::Node;
use crate::paths::{FLAG_PATH, TEXT_PATH};

/// SVG namespace declared on the container
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Bounding box shared by both path descriptors
pub const VIEW_BOX: &str = "0 0 143 35";

/// Scaling/alignment strategy of the container
pub const PRESERVE_ASPECT_RATIO: &str = "xMinYMin meet";

/// Attribute that carries a path's geometry
const SHAPE_ATTRIBUTE: &str = "d";

/// Fixed attributes applied before the caller's bag
pub fn container_defaults() -> Attributes {
    Attributes::new()
        .attr("version", "1.1")
        .attr("xmlns", SVG_NAMESPACE)
        .attr("viewBox", VIEW_BOX)
        .attr("preserveAspectRatio", PRESERVE_ASPECT_RATIO)
}

/// Copy the caller's bag, then pin the shape descriptor
fn leaf(shape: &'static str, attrs: Attributes) -> Node {
    let attrs = attrs.attr(SHAPE_ATTRIBUTE, shape);
    Node::element("path", attrs)
}

/// The flag (maple leaf emblem) part of the wordmark
///
/// `d` is always the fixed descriptor, even if the bag supplies one.
pub fn flag(attrs: Attributes) -> Node {
    trace!(attrs = attrs.len(), "render flag");
    leaf(FLAG_PATH, attrs)
}

/// The "Government of Canada" text part of the wordmark
///
/// `d` is always the fixed descriptor, even if the bag supplies one.
pub fn text(attrs: Attributes) -> Node {
    trace!(attrs = attrs.len(), "render text");
    leaf(TEXT_PATH, attrs)
}

/// The `svg` container
///
/// Defaults come first, the caller's bag is overlaid (caller wins), and
/// `children` are nested in the order given, untouched. Pass a
/// [`Node::title`] as the first child to give the graphic an accessible name.
pub fn svg(attrs: Attributes, children: Vec<Node>) -> Node {
    trace!(
        attrs = attrs.len(),
        children = children.len(),
        "render svg container"
    );
    Node::Element {
        tag: "svg".to_string(),
        attributes: container_defaults().overlay(&attrs),
        children,
    }
}
