#![forbid(unsafe_code)]

/// Errors produced by the Ulriksdal XML-DSig library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    #[error("unexpected end of XML stream")]
    UnexpectedEof,

    #[error("invalid XML structure: {0}")]
    XmlStructure(String),

    #[error("missing required element: {0}")]
    MissingElement(String),

    #[error("missing required attribute: {0}")]
    MissingAttribute(String),

    #[error("unsupported digest algorithm: {0}")]
    BadDigestAlgorithm(String),

    #[error("unsupported signature algorithm: {0}")]
    BadSignatureAlgorithm(String),

    #[error("certificate public key is not RSA")]
    PublicKeyNotRsa,

    #[error("digest mismatch: signed payload does not match DigestValue")]
    BadDigest,

    #[error("signature verification failed: {0}")]
    SignatureInvalid(String),

    #[error("base64 decode error: {0}")]
    Base64(String),

    #[error("certificate error: {0}")]
    Certificate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
