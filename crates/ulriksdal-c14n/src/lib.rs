#![forbid(unsafe_code)]

//! Exclusive XML Canonicalization (exc-C14N) for the Ulriksdal XML-DSig
//! library.
//!
//! Operates on the raw token stream interface of `ulriksdal-xml`, so a
//! live tokenizer and a captured token buffer canonicalize the same way.

pub mod escape;
pub mod exclusive;

pub use exclusive::canonicalize;
