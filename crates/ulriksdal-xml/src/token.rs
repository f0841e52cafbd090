#![forbid(unsafe_code)]

//! Owned XML token model.
//!
//! Names are reported exactly as written in the document: prefixes stay
//! verbatim and are never resolved against namespace declarations.
//! Resolution is the consumer's job.

/// A possibly-prefixed XML name, unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QName {
    /// Prefix as written, `""` when the name has none.
    pub prefix: String,
    /// Local part of the name.
    pub local: String,
}

impl QName {
    pub fn new(prefix: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            local: local.into(),
        }
    }

    /// The name as it appears in the document: `prefix:local`, or just
    /// `local` for unprefixed names.
    pub fn qualified(&self) -> String {
        if self.prefix.is_empty() {
            self.local.clone()
        } else {
            format!("{}:{}", self.prefix, self.local)
        }
    }
}

/// A single attribute of a start tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

impl Attribute {
    pub fn new(name: QName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// A namespace declaration attribute: `xmlns="uri"` for the empty
    /// prefix, `xmlns:prefix="uri"` otherwise.
    pub fn xmlns(prefix: &str, uri: &str) -> Self {
        let name = if prefix.is_empty() {
            QName::new("", "xmlns")
        } else {
            QName::new("xmlns", prefix)
        };
        Self::new(name, uri)
    }

    /// If this attribute declares a namespace, the `(prefix, uri)` pair it
    /// binds; the empty prefix is the default namespace.
    pub fn xmlns_declaration(&self) -> Option<(&str, &str)> {
        if self.name.prefix.is_empty() && self.name.local == "xmlns" {
            Some(("", &self.value))
        } else if self.name.prefix == "xmlns" {
            Some((&self.name.local, &self.value))
        } else {
            None
        }
    }
}

/// A start tag with its attributes in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartElement {
    pub name: QName,
    pub attributes: Vec<Attribute>,
}

/// One raw XML token.
///
/// Every variant owns its data, so a `clone` is the deep copy the
/// splitter relies on when it retains tokens past the parser's internal
/// buffer lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartElement(StartElement),
    EndElement(QName),
    /// Character data with entities already expanded. CDATA sections
    /// arrive as plain character data.
    CharData(String),
    Comment(String),
    ProcessingInstruction {
        target: String,
        content: Option<String>,
    },
    /// A `<!...>` directive such as a DOCTYPE.
    Directive(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name() {
        assert_eq!(QName::new("", "root").qualified(), "root");
        assert_eq!(QName::new("ds", "Signature").qualified(), "ds:Signature");
    }

    #[test]
    fn xmlns_declaration_forms() {
        let default_decl = Attribute::xmlns("", "http://example.com");
        assert_eq!(default_decl.name, QName::new("", "xmlns"));
        assert_eq!(
            default_decl.xmlns_declaration(),
            Some(("", "http://example.com"))
        );

        let prefixed = Attribute::xmlns("ds", "http://www.w3.org/2000/09/xmldsig#");
        assert_eq!(prefixed.name, QName::new("xmlns", "ds"));
        assert_eq!(
            prefixed.xmlns_declaration(),
            Some(("ds", "http://www.w3.org/2000/09/xmldsig#"))
        );

        let plain = Attribute::new(QName::new("", "id"), "x");
        assert_eq!(plain.xmlns_declaration(), None);
    }
}
