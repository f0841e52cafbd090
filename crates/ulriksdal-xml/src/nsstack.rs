#![forbid(unsafe_code)]

//! Namespace prefix bindings for a stack of open elements.

use crate::token::Attribute;
use std::collections::BTreeMap;

/// The prefix → URI bindings declared on a single element. The empty
/// prefix holds the default namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceFrame {
    bindings: BTreeMap<String, String>,
}

impl NamespaceFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the `xmlns` declarations of a start tag's attribute list.
    pub fn from_attributes(attributes: &[Attribute]) -> Self {
        let mut frame = Self::new();
        for attr in attributes {
            if let Some((prefix, uri)) = attr.xmlns_declaration() {
                frame.bind(prefix, uri);
            }
        }
        frame
    }

    pub fn bind(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        self.bindings.insert(prefix.into(), uri.into());
    }

    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.bindings.get(prefix).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|(prefix, uri)| (prefix.as_str(), uri.as_str()))
    }
}

/// One frame per currently-open element; lookups walk from the top.
///
/// After a balanced token stream has been processed the stack is empty
/// again.
#[derive(Debug, Clone, Default)]
pub struct NamespaceStack {
    frames: Vec<NamespaceFrame>,
}

impl NamespaceStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: NamespaceFrame) {
        self.frames.push(frame);
    }

    /// Remove the top frame. Popping an empty stack is a bug in the
    /// caller, not a runtime condition.
    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "namespace stack underflow");
        self.frames.pop();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The URI bound to `prefix`, or `""` when it is unbound. Frames
    /// closer to the top shadow those below. The empty prefix queries the
    /// default namespace.
    pub fn lookup(&self, prefix: &str) -> &str {
        for frame in self.frames.iter().rev() {
            if let Some(uri) = frame.get(prefix) {
                return uri;
            }
        }
        ""
    }

    /// Every binding currently in scope, topmost frame winning on
    /// collisions.
    pub fn flatten(&self) -> BTreeMap<String, String> {
        let mut all = BTreeMap::new();
        for frame in &self.frames {
            for (prefix, uri) in frame.iter() {
                all.insert(prefix.to_owned(), uri.to_owned());
            }
        }
        all
    }
}
