//! Attribute bags forwarded onto rendered elements
//!
//! An [`Attributes`] bag is an open, insertion-ordered map from attribute name
//! to [`AttrValue`]. Components never interpret the keys; they only copy them
//! onto the element they emit.
//!
//! ```rust
//! use goc_wordmark::Attributes;
//!
//! let attrs = Attributes::new()
//!     .attr("role", "img")
//!     .attr("aria-label", "Government of Canada")
//!     .attr("width", 200)
//!     .on("onClick", |_| {});
//!
//! assert_eq!(attrs.len(), 4);
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Context handed to a callback when the host framework fires it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventContext {
    /// Name of the attribute the callback was registered under (e.g. `onClick`)
    pub event: String,
}

impl EventContext {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
        }
    }
}

/// A caller-supplied event handler
///
/// Uses `Arc` so rendered trees stay `Send + Sync`. Two callbacks compare
/// equal only when they share the same allocation.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(&EventContext) + Send + Sync>);

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&EventContext) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the handler
    pub fn call(&self, ctx: &EventContext) {
        (self.0)(ctx)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// A single attribute value
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Str(String),
    Number(f64),
    Bool(bool),
    /// Event handler; kept on the tree but never serialized to markup
    Callback(Callback),
}

impl AttrValue {
    /// String form of the value, `None` for callbacks
    pub fn as_markup(&self) -> Option<String> {
        match self {
            AttrValue::Str(s) => Some(s.clone()),
            AttrValue::Number(n) => Some(n.to_string()),
            AttrValue::Bool(b) => Some(b.to_string()),
            AttrValue::Callback(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            AttrValue::Callback(cb) => Some(cb),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        AttrValue::Str(s.clone())
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<f32> for AttrValue {
    fn from(n: f32) -> Self {
        AttrValue::Number(n as f64)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Number(n as f64)
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        AttrValue::Number(n as f64)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<Callback> for AttrValue {
    fn from(cb: Callback) -> Self {
        AttrValue::Callback(cb)
    }
}

/// Ordered attribute bag
///
/// Inserting an existing key replaces its value but keeps the key's original
/// position, so merged output stays in a stable order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    entries: IndexMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Builder-style callback insert
    pub fn on<F>(self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&EventContext) + Send + Sync + 'static,
    {
        self.attr(name, Callback::new(handler))
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// Shortcut for string values
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy every entry of `other` over this bag; `other` wins on collision
    pub fn overlay(mut self, other: &Attributes) -> Self {
        for (name, value) in &other.entries {
            self.entries.insert(name.clone(), value.clone());
        }
        self
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = indexmap::map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
