//! Rendered node tree
//!
//! Components produce a [`Node`]; the host framework consumes it. The tree
//! also carries the read-only queries used to locate output (by role, label,
//! title, attribute) and serializes itself to SVG markup through `Display`.

use std::fmt;

use crate::attributes::{AttrValue, Attributes};

/// One rendered node
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A markup element with attributes and nested content
    Element {
        tag: String,
        attributes: Attributes,
        children: Vec<Node>,
    },
    /// Character data
    Text(String),
}

impl Node {
    /// Create an element with no children
    pub fn element(tag: impl Into<String>, attributes: Attributes) -> Self {
        Node::Element {
            tag: tag.into(),
            attributes,
            children: Vec::new(),
        }
    }

    /// Create a character data node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Accessible `<title>` element wrapping `content`
    pub fn title(content: impl Into<String>) -> Self {
        Node::element("title", Attributes::new()).with_child(Node::text(content))
    }

    /// Append a child
    ///
    /// Text nodes cannot hold children: on a [`Node::Text`] the child is
    /// dropped and `self` is returned unchanged.
    pub fn with_child(mut self, child: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Element tag, `None` for text
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            Node::Text(_) => None,
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Node::Element { attributes, .. } => Some(attributes),
            Node::Text(_) => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes().and_then(|a| a.get(name))
    }

    /// String attribute lookup
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(AttrValue::as_str)
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    /// Concatenated character data of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(s) => s.clone(),
            Node::Element { children, .. } => children.iter().map(Node::text_content).collect(),
        }
    }

    /// Depth-first, pre-order walk of every node below this one
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children().iter().rev().collect(),
        }
    }

    /// First node (self included) matching the predicate
    pub fn find<P>(&self, mut predicate: P) -> Option<&Node>
    where
        P: FnMut(&Node) -> bool,
    {
        if predicate(self) {
            return Some(self);
        }
        self.descendants().find(|n| predicate(*n))
    }

    /// First element whose string attribute `name` equals `value`
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Node> {
        self.find(|n| n.attr(name).and_then(AttrValue::as_markup).as_deref() == Some(value))
    }

    pub fn find_by_role(&self, role: &str) -> Option<&Node> {
        self.find_by_attr("role", role)
    }

    pub fn find_by_label(&self, label: &str) -> Option<&Node> {
        self.find_by_attr("aria-label", label)
    }

    /// First node titled `title`
    ///
    /// Matches a `<title>` element whose text content equals `title`, or any
    /// element carrying a `title` attribute with that value.
    pub fn find_by_title(&self, title: &str) -> Option<&Node> {
        self.find(|n| {
            (n.tag() == Some("title") && n.text_content() == title)
                || n.attr_str("title") == Some(title)
        })
    }

    /// Element that directly contains `target`, compared by identity
    pub fn parent_of(&self, target: &Node) -> Option<&Node> {
        self.find(|n| n.children().iter().any(|c| std::ptr::eq(c, target)))
    }

    /// Serialize to SVG markup
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

/// Iterator returned by [`Node::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Markup
// ─────────────────────────────────────────────────────────────────────────────

fn escape(raw: &str, out: &mut fmt::Formatter<'_>) -> fmt::Result {
    for ch in raw.chars() {
        match ch {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            c => fmt::Write::write_char(out, c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(s) => escape(s, f),
            Node::Element {
                tag,
                attributes,
                children,
            } => {
                write!(f, "<{tag}")?;
                for (name, value) in attributes {
                    // Handlers belong to the host framework, not the markup
                    let Some(value) = value.as_markup() else {
                        continue;
                    };
                    write!(f, " {name}=\"")?;
                    escape(&value, f)?;
                    f.write_str("\"")?;
                }
                if children.is_empty() {
                    return f.write_str(" />");
                }
                f.write_str(">")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{tag}>")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::element("svg", Attributes::new().attr("role", "img"))
            .with_child(Node::title("some title"))
            .with_child(Node::element("path", Attributes::new().attr("id", "a")))
            .with_child(
                Node::element("g", Attributes::new())
                    .with_child(Node::element("path", Attributes::new().attr("id", "b"))),
            )
    }

    #[test]
    fn test_descendants_preorder() {
        let tree = sample();
        let tags: Vec<_> = tree.descendants().filter_map(Node::tag).collect();
        assert_eq!(tags, vec!["title", "path", "g", "path"]);
    }

    #[test]
    fn test_find_includes_self() {
        let tree = sample();
        assert_eq!(tree.find_by_role("img").and_then(Node::tag), Some("svg"));
        assert_eq!(
            tree.find_by_attr("id", "b").and_then(Node::tag),
            Some("path")
        );
        assert!(tree.find_by_attr("id", "missing").is_none());
    }

    #[test]
    fn test_title_lookup_and_parent() {
        let tree = sample();
        let title = tree.find_by_title("some title").unwrap();
        let parent = tree.parent_of(title).unwrap();
        assert_eq!(parent.attr_str("role"), Some("img"));

        let nested = tree.find_by_attr("id", "b").unwrap();
        assert_eq!(tree.parent_of(nested).and_then(Node::tag), Some("g"));
        assert!(tree.parent_of(&tree).is_none());
    }

    #[test]
    fn test_title_lookup_matches_attribute() {
        let tree = Node::element("svg", Attributes::new()).with_child(Node::element(
            "path",
            Attributes::new().attr("id", "p").attr("title", "maple leaf"),
        ));

        let found = tree.find_by_title("maple leaf").unwrap();
        assert_eq!(found.attr_str("id"), Some("p"));
        assert!(tree.find_by_title("other").is_none());
    }

    #[test]
    fn test_with_child_on_text_drops_child() {
        let node = Node::text("plain").with_child(Node::title("ignored"));
        assert_eq!(node, Node::text("plain"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_markup_escapes_and_self_closes() {
        let node = Node::element(
            "svg",
            Attributes::new()
                .attr("aria-label", "A & \"B\"")
                .attr("width", 10)
                .on("onClick", |_| {}),
        )
        .with_child(Node::title("<x>"))
        .with_child(Node::element("path", Attributes::new().attr("d", "m 0,0")));

        assert_eq!(
            node.to_markup(),
            "<svg aria-label=\"A &amp; &quot;B&quot;\" width=\"10\">\
             <title>&lt;x&gt;</title><path d=\"m 0,0\" /></svg>"
        );
    }
}
