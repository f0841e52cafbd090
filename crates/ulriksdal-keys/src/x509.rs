#![forbid(unsafe_code)]

//! Certificate parsing and public-key extraction.

use der::{Decode, Encode};
use spki::DecodePublicKey;
use ulriksdal_core::{Error, Result};
use x509_cert::Certificate;

/// rsaEncryption (RFC 8017)
const RSA_ENCRYPTION_OID: &str = "1.2.840.113549.1.1.1";

/// Parse a DER-encoded X.509 certificate.
pub fn certificate_from_der(data: &[u8]) -> Result<Certificate> {
    Certificate::from_der(data)
        .map_err(|e| Error::Certificate(format!("failed to parse X.509 certificate: {e}")))
}

/// Parse a PEM-encoded X.509 certificate.
pub fn certificate_from_pem(data: &[u8]) -> Result<Certificate> {
    let pem_str = std::str::from_utf8(data)
        .map_err(|e| Error::Certificate(format!("invalid PEM encoding: {e}")))?;

    // Trim surrounding whitespace — some PEM files carry extra newlines.
    let (label, der_bytes) = pem_rfc7468::decode_vec(pem_str.trim().as_bytes())
        .map_err(|e| Error::Certificate(format!("failed to decode certificate PEM: {e}")))?;

    if label != "CERTIFICATE" {
        return Err(Error::Certificate(format!(
            "expected CERTIFICATE PEM label, got: {label}"
        )));
    }

    certificate_from_der(&der_bytes)
}

/// Extract the RSA public key from a certificate.
///
/// Returns [`Error::PublicKeyNotRsa`] for any other key type.
pub fn rsa_public_key(cert: &Certificate) -> Result<rsa::RsaPublicKey> {
    let spki = &cert.tbs_certificate.subject_public_key_info;
    if spki.algorithm.oid.to_string() != RSA_ENCRYPTION_OID {
        return Err(Error::PublicKeyNotRsa);
    }
    let spki_der = spki
        .to_der()
        .map_err(|e| Error::Certificate(format!("failed to encode SPKI: {e}")))?;
    rsa::RsaPublicKey::from_public_key_der(&spki_der).map_err(|_| Error::PublicKeyNotRsa)
}

#[cfg(test)]
mod tests {
    use super::*;

    // openssl req -x509 -newkey rsa:1024 -keyout key.pem -out cert.pem -days 365
    //   -nodes -subj "/C=US/ST=Oregon/L=Portland/O=Company Name/OU=Org/CN=www.example.com"
    const RSA_CERT_PEM: &str = "-----BEGIN CERTIFICATE-----
MIICVzCCAcACCQC9lei8Ir3KDzANBgkqhkiG9w0BAQsFADBwMQswCQYDVQQGEwJV
UzEPMA0GA1UECAwGT3JlZ29uMREwDwYDVQQHDAhQb3J0bGFuZDEVMBMGA1UECgwM
Q29tcGFueSBOYW1lMQwwCgYDVQQLDANPcmcxGDAWBgNVBAMMD3d3dy5leGFtcGxl
LmNvbTAeFw0yMDA1MjgxNzUzNTJaFw0yMTA1MjgxNzUzNTJaMHAxCzAJBgNVBAYT
AlVTMQ8wDQYDVQQIDAZPcmVnb24xETAPBgNVBAcMCFBvcnRsYW5kMRUwEwYDVQQK
DAxDb21wYW55IE5hbWUxDDAKBgNVBAsMA09yZzEYMBYGA1UEAwwPd3d3LmV4YW1w
bGUuY29tMIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQDAqmyYL/bNqAL7uHFx
lHT2Ullmh0UvMb1mJrtTVb/j+k+nKNklbdbz/mSOdc7OJ8kwu9xNcKvDADr8acir
74p8Tp9hYEOR8p2XBcFiB7x5g76Vdm6NM4g3Ib5utXBRd13YSQajD6ynJYprrTBn
gGnXzdvZ6ZhX3QeJebO9m9u7WQIDAQABMA0GCSqGSIb3DQEBCwUAA4GBAL8vaXlm
1dd8U9UCrnt6X0MHvd5l5RRWqvXcV7FvjBqs6U9TP+soCKAzQSpJh4WpY1qaMlgc
FVaTFT9FFMoqYHTn4yj/C6GS7tcyXEStKvr7UA6mH4yfepwndoc6/KAuCph1ucsb
VuPh47/DnXFpm4ZKNsojqBwUjM9/EkP0UGGK
-----END CERTIFICATE-----";

    // Same subject, EC P-256 key.
    const EC_CERT_PEM: &str = "-----BEGIN CERTIFICATE-----
MIIB0TCCAXYCCQDW+s9OdMppmzAKBggqhkjOPQQDAjBwMQswCQYDVQQGEwJVUzEP
MA0GA1UECAwGT3JlZ29uMREwDwYDVQQHDAhQb3J0bGFuZDEVMBMGA1UECgwMQ29t
cGFueSBOYW1lMQwwCgYDVQQLDANPcmcxGDAWBgNVBAMMD3d3dy5leGFtcGxlLmNv
bTAeFw0yMDA1MjIwMTIzMzNaFw0yMTA1MjIwMTIzMzNaMHAxCzAJBgNVBAYTAlVT
MQ8wDQYDVQQIDAZPcmVnb24xETAPBgNVBAcMCFBvcnRsYW5kMRUwEwYDVQQKDAxD
b21wYW55IE5hbWUxDDAKBgNVBAsMA09yZzEYMBYGA1UEAwwPd3d3LmV4YW1wbGUu
Y29tMFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEBEHpQCB2XIoK1HNKr47JCF66
ysNNXOsauFO+6OLus4tgcwCr61D/I7tTED7+9If2TgDZpvx/IA2qzaSVa6EJbjAK
BggqhkjOPQQDAgNJADBGAiEAh1th49i2qBgQtLFbuoriHLRWabHWpBqhhFg+RcBs
diwCIQC/JKDqOZLQ3+PrWMHO+fh3uU8cj/cPRlsUkE3wjaM4lA==
-----END CERTIFICATE-----";

    #[test]
    fn extracts_rsa_public_key() {
        let cert = certificate_from_pem(RSA_CERT_PEM.as_bytes()).unwrap();
        let key = rsa_public_key(&cert).unwrap();
        use rsa::traits::PublicKeyParts;
        assert_eq!(key.size() * 8, 1024);
    }

    #[test]
    fn ec_certificate_is_not_rsa() {
        let cert = certificate_from_pem(EC_CERT_PEM.as_bytes()).unwrap();
        let err = rsa_public_key(&cert).unwrap_err();
        assert!(matches!(err, Error::PublicKeyNotRsa));
    }

    #[test]
    fn rejects_non_certificate_pem() {
        let err = certificate_from_pem(
            b"-----BEGIN PUBLIC KEY-----\nAAAA\n-----END PUBLIC KEY-----",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Certificate(_)));
    }

    #[test]
    fn rejects_garbage_der() {
        assert!(certificate_from_der(&[0x30, 0x00]).is_err());
    }
}
