#![forbid(unsafe_code)]

//! X.509 certificate handling for the Ulriksdal XML-DSig library.
//!
//! The verifier takes an already-chosen certificate and uses its public
//! key as-is. Chain building, expiry and revocation are the caller's
//! concern.

pub mod x509;

pub use x509::{certificate_from_der, certificate_from_pem, rsa_public_key};
