//! Locating the pet list inside the upstream payload.
//!
//! Both upstream feeds wrap the records in a top-level array and put the
//! interesting element at a fixed position. The positions are part of the
//! contract and must not drift.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvelopeLayout {
    /// Live proxy response: `[_, {"petfinder": {"pets": {"pet": [...]}}}]`.
    #[default]
    Proxy,
    /// Weekly shelter snapshot: `[_, _, {"pets": {"pet": [...]}}]`.
    Snapshot,
}

impl EnvelopeLayout {
    fn position(self) -> usize {
        match self {
            EnvelopeLayout::Proxy => 1,
            EnvelopeLayout::Snapshot => 2,
        }
    }

    fn container_path(self) -> &'static [&'static str] {
        match self {
            EnvelopeLayout::Proxy => &["petfinder", "pets"],
            EnvelopeLayout::Snapshot => &["pets"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("payload is not a JSON array")]
    NotAnArray,
    #[error("payload element {position} has no `{key}` object")]
    MissingContainer { position: usize, key: &'static str },
}

/// Returns the raw pet records in payload order.
///
/// An empty payload, a missing `pet` key, a null or an empty list all mean
/// "no cats" rather than an error.
pub fn extract_records(
    payload: &Value,
    layout: EnvelopeLayout,
) -> Result<Vec<&Value>, EnvelopeError> {
    let items = payload.as_array().ok_or(EnvelopeError::NotAnArray)?;
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let position = layout.position();
    let mut node = items.get(position).ok_or(EnvelopeError::MissingContainer {
        position,
        key: layout.container_path()[0],
    })?;
    for key in layout.container_path() {
        node = node
            .get(*key)
            .filter(|child| child.is_object())
            .ok_or(EnvelopeError::MissingContainer { position, key: *key })?;
    }

    Ok(match node.get("pet") {
        Some(Value::Array(pets)) => pets.iter().collect(),
        Some(pet @ Value::Object(_)) => vec![pet],
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::{extract_records, EnvelopeError, EnvelopeLayout};
    use serde_json::json;

    #[test]
    fn proxy_layout_reads_second_element() {
        let payload = json!([
            {"encoding": "utf-8"},
            {"petfinder": {"pets": {"pet": [{"id": {"$t": "1"}}, {"id": {"$t": "2"}}]}}}
        ]);
        let records = extract_records(&payload, EnvelopeLayout::Proxy).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["id"]["$t"], "2");
    }

    #[test]
    fn snapshot_layout_reads_third_element() {
        let payload = json!([{}, {}, {"pets": {"pet": [{"id": {"$t": "9"}}]}}]);
        let records = extract_records(&payload, EnvelopeLayout::Snapshot).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn wrong_layout_is_a_missing_container() {
        let payload = json!([{}, {}, {"pets": {"pet": []}}]);
        let err = extract_records(&payload, EnvelopeLayout::Proxy).unwrap_err();
        assert_eq!(
            err,
            EnvelopeError::MissingContainer {
                position: 1,
                key: "petfinder"
            }
        );
    }

    #[test]
    fn short_payload_is_a_missing_container() {
        let payload = json!([{}]);
        let err = extract_records(&payload, EnvelopeLayout::Snapshot).unwrap_err();
        assert!(matches!(err, EnvelopeError::MissingContainer { position: 2, .. }));
    }

    #[test]
    fn empty_or_absent_pet_list_is_no_records() {
        assert!(extract_records(&json!([]), EnvelopeLayout::Proxy).unwrap().is_empty());
        for pets in [json!({}), json!({"pet": null}), json!({"pet": []})] {
            let payload = json!([{}, {"petfinder": {"pets": pets}}]);
            assert!(extract_records(&payload, EnvelopeLayout::Proxy)
                .unwrap()
                .is_empty());
        }
    }

    #[test]
    fn single_pet_object_is_one_record() {
        let payload = json!([{}, {"petfinder": {"pets": {"pet": {"id": {"$t": "5"}}}}}]);
        assert_eq!(extract_records(&payload, EnvelopeLayout::Proxy).unwrap().len(), 1);
    }

    #[test]
    fn object_payload_is_rejected() {
        let payload = json!({"petfinder": {}});
        assert_eq!(
            extract_records(&payload, EnvelopeLayout::Proxy).unwrap_err(),
            EnvelopeError::NotAnArray
        );
    }
}
