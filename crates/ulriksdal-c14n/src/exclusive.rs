#![forbid(unsafe_code)]

//! Exclusive Canonical XML 1.0 over a raw token stream.
//!
//! Algorithm URI: `http://www.w3.org/2001/10/xml-exc-c14n#`
//!
//! Only "visibly utilized" namespace declarations are output: the prefix
//! of the element's own name and the prefixes of its attributes. A
//! binding already rendered with the same URI by the nearest output
//! ancestor is not repeated. Comments are omitted, as is everything in
//! the DTD; the serialization never carries an XML declaration.

use crate::escape;
use std::collections::{BTreeMap, HashSet};
use ulriksdal_core::{ns, Error, Result};
use ulriksdal_xml::{
    Attribute, NamespaceFrame, NamespaceStack, QName, RawTokenReader, StartElement, Token,
};

/// Canonicalize a token stream into its exclusive-C14N byte form.
///
/// The stream must carry exactly the nodes to serialize; the first start
/// tag becomes the document element and any in-scope namespace bindings
/// it needs must be present as `xmlns` attributes on its tokens. A
/// stream that ends before the document element does, or that never
/// contains one, is an unexpected-EOF error.
pub fn canonicalize<R: RawTokenReader>(mut reader: R) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut ns_stack = NamespaceStack::new();
    let mut rendered: Vec<BTreeMap<String, String>> = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    while let Some(token) = reader.next_token()? {
        match token {
            Token::StartElement(elem) => {
                render_start_element(&elem, &mut out, &mut ns_stack, &mut rendered)?;
                depth += 1;
                seen_root = true;
            }
            Token::EndElement(name) => {
                if depth == 0 {
                    return Err(Error::XmlStructure(format!(
                        "unmatched end tag: {}",
                        name.qualified()
                    )));
                }
                out.extend_from_slice(b"</");
                out.extend_from_slice(name.qualified().as_bytes());
                out.push(b'>');
                ns_stack.pop();
                rendered.pop();
                depth -= 1;
            }
            Token::CharData(text) => {
                // Character data outside the document element is not part
                // of the canonical form.
                if depth > 0 {
                    escape::text(&text, &mut out);
                }
            }
            Token::Comment(_) => {}
            Token::ProcessingInstruction { target, content } => {
                render_pi(&target, content.as_deref(), depth, seen_root, &mut out);
            }
            Token::Directive(_) => {}
        }
    }

    if depth > 0 || !seen_root {
        return Err(Error::UnexpectedEof);
    }
    Ok(out)
}

fn render_start_element(
    elem: &StartElement,
    out: &mut Vec<u8>,
    ns_stack: &mut NamespaceStack,
    rendered: &mut Vec<BTreeMap<String, String>>,
) -> Result<()> {
    ns_stack.push(NamespaceFrame::from_attributes(&elem.attributes));

    // Prefixes this element visibly utilizes: its own plus those of its
    // attributes. Unprefixed attributes are in no namespace and do not
    // count toward the default namespace.
    let mut utilized: HashSet<&str> = HashSet::new();
    utilized.insert(elem.name.prefix.as_str());
    for attr in &elem.attributes {
        if attr.xmlns_declaration().is_some() {
            continue;
        }
        if !attr.name.prefix.is_empty() {
            utilized.insert(attr.name.prefix.as_str());
        }
    }

    let mut decls: Vec<(String, String)> = Vec::new();
    let mut rendered_here = BTreeMap::new();
    for prefix in utilized {
        // The xml prefix is bound by definition and never re-declared.
        if prefix == "xml" {
            continue;
        }
        let uri = ns_stack.lookup(prefix);
        if uri.is_empty() {
            if prefix.is_empty() {
                // The default namespace reverts to none under an ancestor
                // that rendered a non-empty default.
                if rendered_lookup(rendered, "").is_some_and(|u| !u.is_empty()) {
                    decls.push((String::new(), String::new()));
                    rendered_here.insert(String::new(), String::new());
                }
            } else {
                return Err(Error::XmlStructure(format!(
                    "undeclared namespace prefix: {prefix}"
                )));
            }
        } else if rendered_lookup(rendered, prefix) != Some(uri) {
            decls.push((prefix.to_owned(), uri.to_owned()));
            rendered_here.insert(prefix.to_owned(), uri.to_owned());
        }
    }
    // Default namespace first, then by prefix.
    decls.sort();

    let mut attrs: Vec<(String, &Attribute)> = Vec::new();
    for attr in &elem.attributes {
        if attr.xmlns_declaration().is_some() {
            continue;
        }
        attrs.push((attribute_namespace(&attr.name, ns_stack)?, attr));
    }
    // Unqualified attributes first, then by (namespace URI, local name).
    attrs.sort_by(|(ns_a, a), (ns_b, b)| {
        ns_a.cmp(ns_b).then_with(|| a.name.local.cmp(&b.name.local))
    });

    out.push(b'<');
    out.extend_from_slice(elem.name.qualified().as_bytes());
    for (prefix, uri) in &decls {
        out.extend_from_slice(b" xmlns");
        if !prefix.is_empty() {
            out.push(b':');
            out.extend_from_slice(prefix.as_bytes());
        }
        out.extend_from_slice(b"=\"");
        escape::attr(uri, out);
        out.push(b'"');
    }
    for (_, attr) in &attrs {
        out.push(b' ');
        out.extend_from_slice(attr.name.qualified().as_bytes());
        out.extend_from_slice(b"=\"");
        escape::attr(&attr.value, out);
        out.push(b'"');
    }
    out.push(b'>');

    rendered.push(rendered_here);
    Ok(())
}

/// The binding the nearest output ancestor rendered for `prefix`.
fn rendered_lookup<'a>(
    rendered: &'a [BTreeMap<String, String>],
    prefix: &str,
) -> Option<&'a str> {
    rendered
        .iter()
        .rev()
        .find_map(|frame| frame.get(prefix).map(String::as_str))
}

/// The namespace URI an attribute name resolves to; `""` for unprefixed
/// attributes, which belong to no namespace.
fn attribute_namespace(name: &QName, ns_stack: &NamespaceStack) -> Result<String> {
    if name.prefix.is_empty() {
        return Ok(String::new());
    }
    if name.prefix == "xml" {
        return Ok(ns::XML.to_owned());
    }
    let uri = ns_stack.lookup(&name.prefix);
    if uri.is_empty() {
        return Err(Error::XmlStructure(format!(
            "undeclared namespace prefix: {}",
            name.prefix
        )));
    }
    Ok(uri.to_owned())
}

/// Processing instructions in the prolog get a trailing newline, those in
/// the epilog a leading one.
fn render_pi(target: &str, content: Option<&str>, depth: usize, seen_root: bool, out: &mut Vec<u8>) {
    if depth == 0 && seen_root {
        out.push(b'\n');
    }
    out.extend_from_slice(b"<?");
    out.extend_from_slice(target.as_bytes());
    if let Some(data) = content {
        if !data.is_empty() {
            out.push(b' ');
            escape::pi(data, out);
        }
    }
    out.extend_from_slice(b"?>");
    if depth == 0 && !seen_root {
        out.push(b'\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulriksdal_xml::{TokenBuffer, XmlTokenizer};

    fn canon(text: &str) -> Result<String> {
        let bytes = canonicalize(XmlTokenizer::new(text))?;
        Ok(String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn sorts_attributes_and_keeps_used_declarations() {
        let out = canon(r#"<b:root xmlns:b="http://b" z="2" a="1"><b:child xmlns:b="http://b"/></b:root>"#)
            .unwrap();
        assert_eq!(
            out,
            r#"<b:root xmlns:b="http://b" a="1" z="2"><b:child></b:child></b:root>"#
        );
    }

    #[test]
    fn drops_unused_declarations() {
        let out = canon(r#"<root xmlns:unused="http://u"><x/></root>"#).unwrap();
        assert_eq!(out, "<root><x></x></root>");
    }

    #[test]
    fn renders_default_namespace_once() {
        let out = canon(r#"<root xmlns="http://example.com"><child/></root>"#).unwrap();
        assert_eq!(
            out,
            r#"<root xmlns="http://example.com"><child></child></root>"#
        );
    }

    #[test]
    fn attributes_sort_by_namespace_uri_after_unqualified() {
        let out = canon(
            r#"<root xmlns:a="http://a" xmlns:b="http://b" b:x="1" a:y="2" c="3"></root>"#,
        )
        .unwrap();
        assert_eq!(
            out,
            r#"<root xmlns:a="http://a" xmlns:b="http://b" c="3" a:y="2" b:x="1"></root>"#
        );
    }

    #[test]
    fn redeclared_prefix_is_rendered_again() {
        let out = canon(r#"<a xmlns:p="http://one"><p:b xmlns:p="http://two"/></a>"#).unwrap();
        assert_eq!(out, r#"<a><p:b xmlns:p="http://two"></p:b></a>"#);
    }

    #[test]
    fn default_namespace_unbinding_is_rendered() {
        let out = canon(r#"<root xmlns="http://u"><inner xmlns=""><x/></inner></root>"#).unwrap();
        assert_eq!(
            out,
            r#"<root xmlns="http://u"><inner xmlns=""><x></x></inner></root>"#
        );
    }

    #[test]
    fn comments_are_dropped_and_text_escaped() {
        let out = canon("<root><!-- gone -->a&amp;b</root>").unwrap();
        assert_eq!(out, "<root>a&amp;b</root>");
    }

    #[test]
    fn document_level_pis_get_newline_separators() {
        let out = canon("<?one before?><root/><?two?>").unwrap();
        assert_eq!(out, "<?one before?>\n<root></root>\n<?two?>");
    }

    #[test]
    fn whitespace_outside_document_element_is_dropped() {
        let out = canon("\n\t<root>kept</root>\n").unwrap();
        assert_eq!(out, "<root>kept</root>");
    }

    #[test]
    fn empty_stream_is_unexpected_eof() {
        let err = canonicalize(TokenBuffer::default()).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof));
    }

    #[test]
    fn injected_declarations_are_filtered_by_visibility() {
        // The way the signature splitter hands over a subtree: every
        // in-scope binding of the original document is present as an
        // xmlns attribute on the root token, used or not.
        let tokens = vec![
            Token::StartElement(StartElement {
                name: QName::new("ds", "SignedInfo"),
                attributes: vec![
                    Attribute::xmlns("", "http://example.com"),
                    Attribute::xmlns("ds", "http://www.w3.org/2000/09/xmldsig#"),
                    Attribute::xmlns("other", "http://other"),
                ],
            }),
            Token::StartElement(StartElement {
                name: QName::new("", "Inner"),
                attributes: vec![],
            }),
            Token::EndElement(QName::new("", "Inner")),
            Token::EndElement(QName::new("ds", "SignedInfo")),
        ];
        let out = canonicalize(TokenBuffer::new(tokens)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"<ds:SignedInfo xmlns:ds="http://www.w3.org/2000/09/xmldsig#"><Inner xmlns="http://example.com"></Inner></ds:SignedInfo>"#
        );
    }
}
