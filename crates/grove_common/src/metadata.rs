//! Token metadata decoding
//!
//! The Grove contract builds each tree's `tokenURI` as an inline
//! `data:application/json;base64,` payload, so metadata can be decoded
//! without any network round trip. Remote URIs (http/ipfs) are still legal
//! ERC-721 and are handed back untouched for the caller to fetch.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const INLINE_JSON_PREFIX: &str = "data:application/json;base64,";

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("token URI is empty")]
    Empty,

    #[error("unsupported token URI scheme: {0}")]
    UnsupportedScheme(String),

    #[error("inline metadata is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("inline metadata is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One `attributes` entry of ERC-721 metadata. Values may be strings or
/// numbers depending on the trait, so they stay as raw JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "trait_type")]
    pub trait_type: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A parsed `tokenURI`.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenUri {
    /// Metadata was inline and has been decoded
    Inline(NftMetadata),
    /// Metadata lives at this URL; fetching is the caller's job
    Remote(String),
}

/// Decode a `tokenURI` string.
pub fn parse_token_uri(uri: &str) -> Result<TokenUri, MetadataError> {
    if uri.is_empty() {
        return Err(MetadataError::Empty);
    }

    if let Some(payload) = uri.strip_prefix(INLINE_JSON_PREFIX) {
        let bytes = BASE64.decode(payload)?;
        let metadata: NftMetadata = serde_json::from_slice(&bytes)?;
        debug!(name = %metadata.name, "decoded inline token metadata");
        return Ok(TokenUri::Inline(metadata));
    }

    if uri.starts_with("http://") || uri.starts_with("https://") || uri.starts_with("ipfs://") {
        return Ok(TokenUri::Remote(uri.to_string()));
    }

    Err(MetadataError::UnsupportedScheme(
        uri.split(':').next().unwrap_or(uri).to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline_uri(json: &str) -> String {
        format!("{INLINE_JSON_PREFIX}{}", BASE64.encode(json))
    }

    #[test]
    fn decodes_inline_metadata() {
        let uri = inline_uri(
            r#"{
                "name": "Grove Tree #7",
                "description": "A tree watered for 12 days",
                "image": "ipfs://Qm123",
                "attributes": [
                    {"trait_type": "Stage", "value": "Young Tree"},
                    {"trait_type": "Water Count", "value": 12}
                ]
            }"#,
        );

        let TokenUri::Inline(meta) = parse_token_uri(&uri).unwrap() else {
            panic!("expected inline metadata");
        };
        assert_eq!(meta.name, "Grove Tree #7");
        assert_eq!(meta.attributes.len(), 2);
        assert_eq!(meta.attributes[0].value, serde_json::json!("Young Tree"));
        assert_eq!(meta.attributes[1].value, serde_json::json!(12));
    }

    #[test]
    fn missing_optional_fields_default() {
        let uri = inline_uri(r#"{"name": "Grove Tree #1"}"#);
        let TokenUri::Inline(meta) = parse_token_uri(&uri).unwrap() else {
            panic!("expected inline metadata");
        };
        assert!(meta.description.is_empty());
        assert!(meta.attributes.is_empty());
    }

    #[test]
    fn remote_uris_pass_through() {
        let uri = "https://example.org/tree/7.json";
        assert_eq!(
            parse_token_uri(uri).unwrap(),
            TokenUri::Remote(uri.to_string())
        );
        assert!(matches!(
            parse_token_uri("ipfs://Qm456").unwrap(),
            TokenUri::Remote(_)
        ));
    }

    #[test]
    fn garbage_base64_is_an_error() {
        let uri = format!("{INLINE_JSON_PREFIX}%%%not-base64%%%");
        assert!(matches!(
            parse_token_uri(&uri),
            Err(MetadataError::Base64(_))
        ));
    }

    #[test]
    fn garbage_json_is_an_error() {
        let uri = inline_uri("{not json");
        assert!(matches!(parse_token_uri(&uri), Err(MetadataError::Json(_))));
    }

    #[test]
    fn empty_and_unknown_schemes_rejected() {
        assert!(matches!(parse_token_uri(""), Err(MetadataError::Empty)));
        assert!(matches!(
            parse_token_uri("ftp://example.org/x"),
            Err(MetadataError::UnsupportedScheme(_))
        ));
    }
}
