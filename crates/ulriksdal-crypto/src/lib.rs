#![forbid(unsafe_code)]

//! Cryptographic algorithm registries for the Ulriksdal XML-DSig library.
//!
//! Both registries map the algorithm URIs a signed document carries to
//! concrete implementations. URIs outside the recognized set are typed
//! errors; the set is deliberately closed.

pub mod digest;
pub mod sign;
