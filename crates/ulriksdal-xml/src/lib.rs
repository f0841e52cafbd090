#![forbid(unsafe_code)]

//! Raw XML token streams for the Ulriksdal XML-DSig library.
//!
//! The canonicalizer and the signature splitter both walk a document as a
//! flat token sequence with unresolved names. This crate provides the
//! token model, the reader trait they consume, a replayable in-memory
//! buffer and a tokenizer over quick-xml, plus the namespace stack used
//! to bind prefixes while walking.

pub mod nsstack;
pub mod reader;
pub mod token;
pub mod tokenizer;

pub use nsstack::{NamespaceFrame, NamespaceStack};
pub use reader::{RawTokenReader, TokenBuffer};
pub use token::{Attribute, QName, StartElement, Token};
pub use tokenizer::XmlTokenizer;
