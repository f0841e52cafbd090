#![forbid(unsafe_code)]

//! The signature splitter.
//!
//! Walks a raw token stream once and separates the bytes that get
//! digested from the bytes that get signature-verified.

use ulriksdal_core::{ns, Result};
use ulriksdal_xml::{Attribute, NamespaceFrame, NamespaceStack, RawTokenReader, Token, TokenBuffer};

/// Depth of `<Signature>`: an immediate child of the document root.
const SIGNATURE_DEPTH: usize = 1;

/// Depth of `<SignedInfo>`: an immediate child of `<Signature>`.
const SIGNED_INFO_DEPTH: usize = 2;

/// Split a raw token stream into the canonicalization of everything
/// outside `ds:Signature` (the data to digest) and the canonicalization
/// of the `ds:SignedInfo` subtree (the data to signature-verify).
///
/// `ds:SignedInfo` is serialized as if it were a standalone document:
/// every namespace binding in scope at its position is copied onto its
/// start tag, and the canonicalizer then drops the ones that are not
/// visibly used. A `Signature` element anywhere deeper than an immediate
/// child of the root is ordinary payload and stays in the outer stream
/// untouched.
pub fn split_signature<R: RawTokenReader>(mut reader: R) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut outer: Vec<Token> = Vec::new();
    let mut inner: Vec<Token> = Vec::new();

    let mut in_signature = false;
    let mut in_signed_info = false;
    let mut stack = NamespaceStack::new();

    while let Some(token) = reader.next_token()? {
        match token {
            Token::StartElement(mut elem) => {
                stack.push(NamespaceFrame::from_attributes(&elem.attributes));

                let entering_signature = stack.depth() == SIGNATURE_DEPTH + 1
                    && stack.lookup(&elem.name.prefix) == ns::DSIG
                    && elem.name.local == ns::node::SIGNATURE;
                let entering_signed_info = stack.depth() == SIGNED_INFO_DEPTH + 1
                    && stack.lookup(&elem.name.prefix) == ns::DSIG
                    && elem.name.local == ns::node::SIGNED_INFO;

                if entering_signature {
                    in_signature = true;
                }

                if entering_signed_info {
                    // The canonical form of SignedInfo depends on
                    // namespace declarations that may live on ancestors
                    // outside the copied subtree. Copy every in-scope
                    // binding onto this start tag; exclusive c14n drops
                    // the ones that end up not visibly used.
                    for (prefix, uri) in stack.flatten() {
                        elem.attributes.push(Attribute::xmlns(&prefix, &uri));
                    }
                    in_signed_info = true;
                }

                if in_signed_info {
                    inner.push(Token::StartElement(elem.clone()));
                }
                if !in_signature {
                    outer.push(Token::StartElement(elem));
                }
            }
            Token::EndElement(name) => {
                if in_signed_info {
                    inner.push(Token::EndElement(name.clone()));
                }
                if !in_signature {
                    outer.push(Token::EndElement(name));
                }

                stack.pop();

                if stack.depth() == SIGNATURE_DEPTH && in_signature {
                    in_signature = false;
                }
                if stack.depth() == SIGNED_INFO_DEPTH && in_signed_info {
                    in_signed_info = false;
                }
            }
            other => {
                if in_signed_info {
                    inner.push(other.clone());
                }
                if !in_signature {
                    outer.push(other);
                }
            }
        }
    }

    let outer_bytes = ulriksdal_c14n::canonicalize(TokenBuffer::new(outer))?;
    let inner_bytes = ulriksdal_c14n::canonicalize(TokenBuffer::new(inner))?;
    Ok((outer_bytes, inner_bytes))
}
