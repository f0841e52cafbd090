#![forbid(unsafe_code)]

//! Entity escaping for C14N output.
//!
//! Per the C14N spec:
//! - Text nodes: `&` → `&amp;`, `<` → `&lt;`, `>` → `&gt;`, `\r` → `&#xD;`
//! - Attribute values: `&` → `&amp;`, `<` → `&lt;`, `"` → `&quot;`,
//!   `\t` → `&#x9;`, `\n` → `&#xA;`, `\r` → `&#xD;`
//! - PI data: `\r` → `&#xD;`
//!
//! Escaping is byte-wise into the output buffer; multi-byte UTF-8
//! sequences never contain the ASCII trigger bytes.

/// Escape text node content per C14N rules.
pub fn text(s: &str, out: &mut Vec<u8>) {
    for &b in s.as_bytes() {
        match b {
            b'&' => out.extend_from_slice(b"&amp;"),
            b'<' => out.extend_from_slice(b"&lt;"),
            b'>' => out.extend_from_slice(b"&gt;"),
            b'\r' => out.extend_from_slice(b"&#xD;"),
            _ => out.push(b),
        }
    }
}

/// Escape an attribute value per C14N rules.
pub fn attr(s: &str, out: &mut Vec<u8>) {
    for &b in s.as_bytes() {
        match b {
            b'&' => out.extend_from_slice(b"&amp;"),
            b'<' => out.extend_from_slice(b"&lt;"),
            b'"' => out.extend_from_slice(b"&quot;"),
            b'\t' => out.extend_from_slice(b"&#x9;"),
            b'\n' => out.extend_from_slice(b"&#xA;"),
            b'\r' => out.extend_from_slice(b"&#xD;"),
            _ => out.push(b),
        }
    }
}

/// Escape processing instruction data.
pub fn pi(s: &str, out: &mut Vec<u8>) {
    for &b in s.as_bytes() {
        match b {
            b'\r' => out.extend_from_slice(b"&#xD;"),
            _ => out.push(b),
        }
    }
}
