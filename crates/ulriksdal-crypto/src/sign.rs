#![forbid(unsafe_code)]

//! RSA signature verification for `SignatureMethod`.
//!
//! XML-DSig's RSA methods are PKCS#1 v1.5 with the hash named in the
//! algorithm URI.

use signature::Verifier;
use ulriksdal_core::{algorithm, Error, Result};

/// Trait for signature methods.
pub trait SignatureAlgorithm: std::fmt::Debug {
    /// Algorithm URI.
    fn uri(&self) -> &'static str;
    /// Verify `signature` over `data` with the given public key.
    fn verify(&self, key: &rsa::RsaPublicKey, data: &[u8], signature: &[u8]) -> Result<()>;
}

/// Create a signature method from its URI.
pub fn from_uri(uri: &str) -> Result<Box<dyn SignatureAlgorithm>> {
    match uri {
        algorithm::RSA_SHA1 => Ok(Box::new(RsaPkcs1v15 {
            uri: algorithm::RSA_SHA1,
            hash: HashType::Sha1,
        })),
        algorithm::RSA_SHA256 => Ok(Box::new(RsaPkcs1v15 {
            uri: algorithm::RSA_SHA256,
            hash: HashType::Sha256,
        })),
        _ => Err(Error::BadSignatureAlgorithm(uri.to_owned())),
    }
}

#[derive(Debug, Clone, Copy)]
enum HashType {
    Sha1,
    Sha256,
}

// ── RSA PKCS#1 v1.5 ─────────────────────────────────────────────────

#[derive(Debug)]
struct RsaPkcs1v15 {
    uri: &'static str,
    hash: HashType,
}

impl SignatureAlgorithm for RsaPkcs1v15 {
    fn uri(&self) -> &'static str {
        self.uri
    }

    fn verify(&self, key: &rsa::RsaPublicKey, data: &[u8], sig_bytes: &[u8]) -> Result<()> {
        let sig = rsa::pkcs1v15::Signature::try_from(sig_bytes)
            .map_err(|e| Error::SignatureInvalid(format!("malformed RSA signature: {e}")))?;
        macro_rules! do_verify {
            ($hasher:ty) => {{
                let vk = rsa::pkcs1v15::VerifyingKey::<$hasher>::new(key.clone());
                vk.verify(data, &sig)
                    .map_err(|e| Error::SignatureInvalid(e.to_string()))
            }};
        }
        match self.hash {
            HashType::Sha1 => do_verify!(sha1::Sha1),
            HashType::Sha256 => do_verify!(sha2::Sha256),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_uri_is_rejected() {
        let err = from_uri("nonsense").unwrap_err();
        assert!(matches!(err, Error::BadSignatureAlgorithm(_)));
    }

    #[test]
    fn recognized_uris_round_trip() {
        assert_eq!(from_uri(algorithm::RSA_SHA1).unwrap().uri(), algorithm::RSA_SHA1);
        assert_eq!(
            from_uri(algorithm::RSA_SHA256).unwrap().uri(),
            algorithm::RSA_SHA256
        );
    }
}
