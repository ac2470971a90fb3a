//! Propagation context carrying logging properties
//!
//! A [`Context`] is an immutable, persistent singly-linked list of
//! [`Property`] values. Attaching properties never mutates an existing
//! context: it returns a new head that shares the old chain as its tail.
//! Contexts are cheap to clone and safe to read from many threads, and two
//! branches extending the same parent never observe each other's additions.

use crate::logfmt::Value;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A key/value pair attached to a message or a context
///
/// Keys are not required to be unique; duplicates are kept in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub key: String,
    pub value: Value,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for Property {
    fn from((key, value): (K, V)) -> Self {
        Property::new(key, value)
    }
}

#[derive(Debug)]
struct Node {
    property: Property,
    prev: Option<Arc<Node>>,
}

impl Drop for Node {
    // Unlink iteratively so a long chain cannot overflow the stack
    fn drop(&mut self) {
        let mut next = self.prev.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.prev.take(),
                Err(_) => break,
            }
        }
    }
}

/// Request-scoped carrier of logging properties
///
/// # Example
///
/// ```
/// use rust_logfmt_logger::{Context, Property};
///
/// let root = Context::new();
/// let request = root.with_properties([Property::new("a", 1), Property::new("b", 2)]);
/// let step = request.with_property("c", 3);
///
/// let keys: Vec<_> = step.iter().map(|p| p.key.as_str()).collect();
/// assert_eq!(keys, ["c", "a", "b"]);
/// assert!(root.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
}

impl Context {
    /// An empty context
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Return a context whose chain holds `properties`, in the order given,
    /// followed by everything already in this context.
    ///
    /// With no properties the result shares this context's head, so
    /// [`Context::ptr_eq`] holds between the two.
    #[must_use]
    pub fn with_properties<I, P>(&self, properties: I) -> Context
    where
        I: IntoIterator<Item = P>,
        P: Into<Property>,
    {
        let properties: Vec<Property> = properties.into_iter().map(Into::into).collect();

        // Prepend in reverse so the batch reads in call order from the head
        let mut head = self.head.clone();
        for property in properties.into_iter().rev() {
            head = Some(Arc::new(Node {
                property,
                prev: head,
            }));
        }
        Context { head }
    }

    #[must_use]
    pub fn with_property(&self, key: impl Into<String>, value: impl Into<Value>) -> Context {
        self.with_properties([Property::new(key, value)])
    }

    /// Walk the chain from the newest property to the oldest
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Materialize the chain in head-to-tail order
    pub fn properties(&self) -> Vec<Property> {
        self.iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when both contexts have the same chain head
    pub fn ptr_eq(a: &Context, b: &Context) -> bool {
        match (&a.head, &b.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Context {
    type Item = &'a Property;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the properties of a [`Context`]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Property;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.prev.as_deref();
        Some(&node.property)
    }
}
