//! JSON encoding for schemes and scheme patches.
//!
//! Encoding cannot fail for these plain records. Decoding reports any
//! malformed payload as `None`; a collection either decodes completely or
//! not at all.

use std::io::Read;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::patch::SchemePatch;
use crate::scheme::Scheme;

/// Encode a single scheme.
///
/// # Examples
///
/// ```
/// use permission_scheme::{Scheme, scheme_to_json};
///
/// let json = scheme_to_json(&Scheme::default());
/// assert!(json.contains(r#""default_team_admin_role":"""#));
/// ```
#[must_use]
pub fn scheme_to_json(scheme: &Scheme) -> String {
    encode(scheme)
}

/// Encode a list of schemes as a JSON array.
#[must_use]
pub fn schemes_to_json(schemes: &[Scheme]) -> String {
    encode(&schemes)
}

/// Encode a patch; unset fields become `null`.
#[must_use]
pub fn patch_to_json(patch: &SchemePatch) -> String {
    encode(patch)
}

/// Decode a single scheme, or `None` when the payload is malformed.
#[must_use]
pub fn scheme_from_json(json: &str) -> Option<Scheme> {
    decode(serde_json::from_str(json))
}

/// Decode a list of schemes, or `None` when any part is malformed.
#[must_use]
pub fn schemes_from_json(json: &str) -> Option<Vec<Scheme>> {
    decode(serde_json::from_str(json))
}

/// Decode a patch, or `None` when the payload is malformed.
#[must_use]
pub fn patch_from_json(json: &str) -> Option<SchemePatch> {
    decode(serde_json::from_str(json))
}

/// Reader form of [`scheme_from_json`].
#[must_use]
pub fn scheme_from_reader<R: Read>(reader: R) -> Option<Scheme> {
    decode(serde_json::from_reader(reader))
}

/// Reader form of [`schemes_from_json`].
#[must_use]
pub fn schemes_from_reader<R: Read>(reader: R) -> Option<Vec<Scheme>> {
    decode(serde_json::from_reader(reader))
}

/// Reader form of [`patch_from_json`].
#[must_use]
pub fn patch_from_reader<R: Read>(reader: R) -> Option<SchemePatch> {
    decode(serde_json::from_reader(reader))
}

fn encode<T: Serialize + ?Sized>(value: &T) -> String {
    // Only maps with non-string keys or failing Serialize impls can error;
    // neither occurs for the types encoded here.
    serde_json::to_string(value)
        .inspect_err(|error| debug!(%error, "failed to encode scheme payload"))
        .unwrap_or_default()
}

// Payloads of JSON `null` are treated as malformed: every target type here
// is a struct or sequence, so serde already rejects them.
fn decode<T: DeserializeOwned>(result: serde_json::Result<T>) -> Option<T> {
    result
        .inspect_err(|error| debug!(%error, "discarding malformed scheme payload"))
        .ok()
}

#[cfg(test)]
mod tests {
    //! Unit coverage for decode failure handling; wire-shape tests live in
    //! `tests/codec.rs`.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::syntax("{")]
    #[case::null("null")]
    #[case::wrong_type(r#"{"name": 5}"#)]
    fn malformed_scheme_decodes_to_none(#[case] json: &str) {
        assert_eq!(scheme_from_json(json), None);
    }

    #[rstest]
    #[case::syntax("[{")]
    #[case::null("null")]
    #[case::object("{}")]
    #[case::one_bad_element(r#"[{"name": "ok"}, {"name": 1}]"#)]
    fn malformed_collection_decodes_to_none(#[case] json: &str) {
        assert_eq!(schemes_from_json(json), None);
    }

    #[test]
    fn unencodable_value_yields_empty_string() {
        // serde_json refuses non-string map keys.
        let value = std::collections::BTreeMap::from([((1, 2), "pair")]);
        assert_eq!(encode(&value), "");
    }

    #[test]
    fn malformed_patch_decodes_to_none() {
        assert_eq!(patch_from_json(r#"{"name": false}"#), None);
    }

    #[test]
    fn reader_variants_share_decoding() {
        let bytes: &[u8] = br#"{"name": "from reader", "description": null}"#;
        let patch = patch_from_reader(bytes).expect("patch decodes");
        assert_eq!(patch.name.as_set().map(String::as_str), Some("from reader"));
        assert_eq!(schemes_from_reader(&b"[]"[..]), Some(Vec::new()));
        assert_eq!(scheme_from_reader(&b"nope"[..]), None);
    }
}
