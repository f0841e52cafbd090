#![forbid(unsafe_code)]

//! Parsed representation of a `<Signature>` element.

use ulriksdal_core::{ns, Error, Result};

/// A parsed `<Signature>` element.
///
/// Carries the description of what was signed plus the base64 signature
/// bytes. Producing one does not validate anything; validation happens
/// in [`Signature::verify`](crate::model::Signature::verify).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    pub signed_info: SignedInfo,
    /// Base64 content of `<SignatureValue>`.
    pub signature_value: String,
}

/// The `<SignedInfo>` subtree of a signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignedInfo {
    /// `CanonicalizationMethod/@Algorithm`.
    pub canonicalization_method: String,
    /// `SignatureMethod/@Algorithm`.
    pub signature_method: String,
    pub reference: Reference,
}

/// The single `<Reference>` of an enveloped signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reference {
    /// `@URI`, parsed but not interpreted.
    pub uri: String,
    /// `Transform/@Algorithm` values, parsed but not interpreted.
    pub transforms: Vec<String>,
    /// `DigestMethod/@Algorithm`.
    pub digest_method: String,
    /// Base64 content of `<DigestValue>`.
    pub digest_value: String,
}

impl Signature {
    /// Parse the first `<Signature>` (XML-DSig namespace) found in a
    /// document.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml).map_err(|e| Error::XmlParse(e.to_string()))?;
        let sig_node = doc
            .descendants()
            .find(|n| is_dsig_element(n, ns::node::SIGNATURE))
            .ok_or_else(|| Error::MissingElement(ns::node::SIGNATURE.into()))?;
        Self::from_node(sig_node)
    }

    /// Parse from an already-located `<Signature>` element node.
    pub fn from_node(sig_node: roxmltree::Node<'_, '_>) -> Result<Self> {
        let signed_info_node = find_child(sig_node, ns::node::SIGNED_INFO)
            .ok_or_else(|| Error::MissingElement(ns::node::SIGNED_INFO.into()))?;
        let signature_value_node = find_child(sig_node, ns::node::SIGNATURE_VALUE)
            .ok_or_else(|| Error::MissingElement(ns::node::SIGNATURE_VALUE.into()))?;

        let canonicalization_method = algorithm_of(
            find_child(signed_info_node, ns::node::CANONICALIZATION_METHOD)
                .ok_or_else(|| Error::MissingElement(ns::node::CANONICALIZATION_METHOD.into()))?,
        )?;
        let signature_method = algorithm_of(
            find_child(signed_info_node, ns::node::SIGNATURE_METHOD)
                .ok_or_else(|| Error::MissingElement(ns::node::SIGNATURE_METHOD.into()))?,
        )?;

        let reference_node = find_child(signed_info_node, ns::node::REFERENCE)
            .ok_or_else(|| Error::MissingElement(ns::node::REFERENCE.into()))?;
        let digest_method = algorithm_of(
            find_child(reference_node, ns::node::DIGEST_METHOD)
                .ok_or_else(|| Error::MissingElement(ns::node::DIGEST_METHOD.into()))?,
        )?;
        let digest_value_node = find_child(reference_node, ns::node::DIGEST_VALUE)
            .ok_or_else(|| Error::MissingElement(ns::node::DIGEST_VALUE.into()))?;

        let mut transforms = Vec::new();
        if let Some(transforms_node) = find_child(reference_node, ns::node::TRANSFORMS) {
            for transform in transforms_node
                .children()
                .filter(|n| is_dsig_element(n, ns::node::TRANSFORM))
            {
                transforms.push(
                    transform
                        .attribute(ns::attr::ALGORITHM)
                        .unwrap_or("")
                        .to_owned(),
                );
            }
        }

        Ok(Self {
            signed_info: SignedInfo {
                canonicalization_method,
                signature_method,
                reference: Reference {
                    uri: reference_node
                        .attribute(ns::attr::URI)
                        .unwrap_or("")
                        .to_owned(),
                    transforms,
                    digest_method,
                    digest_value: text_of(digest_value_node),
                },
            },
            signature_value: text_of(signature_value_node),
        })
    }
}

fn is_dsig_element(node: &roxmltree::Node<'_, '_>, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local_name
        && node.tag_name().namespace().unwrap_or("") == ns::DSIG
}

fn find_child<'a, 'input>(
    parent: roxmltree::Node<'a, 'input>,
    local_name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    parent
        .children()
        .find(|n| is_dsig_element(n, local_name))
}

fn algorithm_of(node: roxmltree::Node<'_, '_>) -> Result<String> {
    node.attribute(ns::attr::ALGORITHM)
        .map(str::to_owned)
        .ok_or_else(|| {
            Error::MissingAttribute(format!("Algorithm on {}", node.tag_name().name()))
        })
}

fn text_of(node: roxmltree::Node<'_, '_>) -> String {
    node.text().unwrap_or("").trim().to_owned()
}
