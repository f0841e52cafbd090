#![forbid(unsafe_code)]

pub use ulriksdal_core as core;
pub use ulriksdal_xml as xml;
pub use ulriksdal_c14n as c14n;
pub use ulriksdal_crypto as crypto;
pub use ulriksdal_keys as keys;
pub use ulriksdal_dsig as dsig;

pub use ulriksdal_core::{Error, Result};
pub use ulriksdal_dsig::Signature;
