#![forbid(unsafe_code)]

//! Enveloped-signature verification.

use crate::model::Signature;
use crate::split;
use base64::Engine;
use ulriksdal_core::{Error, Result};
use ulriksdal_crypto::{digest, sign};
use ulriksdal_keys::x509;
use ulriksdal_xml::RawTokenReader;
use x509_cert::Certificate;

impl Signature {
    /// Verify this signature against `cert` over a raw token stream of
    /// the document it is embedded in.
    ///
    /// The stream is split into the enveloping payload and the
    /// `SignedInfo` subtree. The payload digest must match
    /// `DigestValue`, and `SignatureValue` must verify against the
    /// certificate's RSA public key with the hash named by
    /// `SignatureMethod`. The first failure is returned and later steps
    /// are not attempted.
    pub fn verify<R: RawTokenReader>(&self, cert: &Certificate, reader: R) -> Result<()> {
        let (to_digest, to_verify) = split::split_signature(reader)?;

        let expected_digest = decode_base64(&self.signed_info.reference.digest_value)?;

        let computed_digest =
            digest::digest(&self.signed_info.reference.digest_method, &to_digest)?;

        // A plain comparison: the digest is not a MAC and carries no
        // secret. A mismatch says the enveloping data no longer matches
        // the signature embedded in it.
        if computed_digest != expected_digest {
            return Err(Error::BadDigest);
        }

        let public_key = x509::rsa_public_key(cert)?;

        let algorithm = sign::from_uri(&self.signed_info.signature_method)?;

        let signature = decode_base64(&self.signature_value)?;

        algorithm.verify(&public_key, &to_verify, &signature)
    }
}

/// Decode base64 text, ignoring embedded whitespace.
fn decode_base64(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| Error::Base64(e.to_string()))
}
