#![forbid(unsafe_code)]

//! Enveloped XML-DSig verification.
//!
//! Processing order:
//! 1. Unmarshal the `<Signature>` element into a value object
//! 2. Split the document's raw token stream: data outside `ds:Signature`
//!    is digested, the `ds:SignedInfo` subtree is signature-verified
//! 3. Compare the payload digest against `DigestValue`
//! 4. Verify `SignatureValue` against the certificate's RSA key

pub mod model;
pub mod split;
mod verify;

pub use model::{Reference, Signature, SignedInfo};
pub use split::split_signature;
