//! Government of Canada Wordmark
//!
//! Headless components that render the official wordmark as an SVG node tree:
//!
//! - **`svg`**: the container, with `viewBox="0 0 143 35"` and
//!   `preserveAspectRatio="xMinYMin meet"` preset
//! - **`flag`**: the maple leaf emblem path
//! - **`text`**: the "Government of Canada" glyph path
//!
//! Every component forwards the caller's [`Attributes`] untouched, so aria
//! attributes, styling hooks and event handlers are left to the caller.
//! Labels and titles are never generated here; bring your own i18n.
//!
//! # Example
//!
//! ```rust
//! use goc_wordmark::{Attributes, Node, WORDMARK};
//!
//! let node = (WORDMARK.svg)(
//!     Attributes::new()
//!         .attr("aria-label", "Government of Canada")
//!         .attr("role", "img")
//!         .attr("width", "200px"),
//!     vec![
//!         Node::title("Government of Canada"),
//!         (WORDMARK.flag)(Attributes::new()),
//!         (WORDMARK.text)(Attributes::new()),
//!     ],
//! );
//!
//! assert!(node.to_markup().starts_with("<svg version=\"1.1\""));
//! ```

pub mod attributes;
pub mod components;
pub mod node;
pub mod paths;
pub mod wordmark;

pub use attributes::{AttrValue, Attributes, Callback, EventContext};
pub use components::{
    container_defaults, flag, svg, text, PRESERVE_ASPECT_RATIO, SVG_NAMESPACE, VIEW_BOX,
};
pub use node::{Descendants, Node};
pub use paths::{FLAG_PATH, TEXT_PATH};
pub use wordmark::{Wordmark, WORDMARK};
