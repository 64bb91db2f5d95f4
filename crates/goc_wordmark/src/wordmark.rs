//! Grouping handle for the three components

use crate::attributes::Attributes;
use crate::components;
use crate::node::Node;

/// The container and both leaves under one handle
///
/// ```rust
/// use goc_wordmark::{Attributes, WORDMARK};
///
/// let node = (WORDMARK.svg)(
///     Attributes::new().attr("role", "img").attr("width", "200px"),
///     vec![(WORDMARK.flag)(Attributes::new()), (WORDMARK.text)(Attributes::new())],
/// );
/// assert_eq!(node.children().len(), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Wordmark {
    pub svg: fn(Attributes, Vec<Node>) -> Node,
    pub flag: fn(Attributes) -> Node,
    pub text: fn(Attributes) -> Node,
}

/// The one shared grouping value
pub const WORDMARK: Wordmark = Wordmark {
    svg: components::svg,
    flag: components::flag,
    text: components::text,
};

impl Wordmark {
    /// Container holding the flag followed by the text, with bare leaves
    pub fn standard(&self, attrs: Attributes) -> Node {
        (self.svg)(
            attrs,
            vec![(self.flag)(Attributes::new()), (self.text)(Attributes::new())],
        )
    }

    /// Same as [`Wordmark::standard`] with an accessible `<title>` first
    pub fn titled(&self, attrs: Attributes, title: impl Into<String>) -> Node {
        (self.svg)(
            attrs,
            vec![
                Node::title(title),
                (self.flag)(Attributes::new()),
                (self.text)(Attributes::new()),
            ],
        )
    }
}

impl Default for Wordmark {
    fn default() -> Self {
        WORDMARK
    }
}
