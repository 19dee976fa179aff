//! Wire-to-domain normalization, done once at the store boundary.
//!
//! The backend sends `ogp_data` and `comments` either as structured JSON or
//! as JSON-encoded strings depending on which code path produced the row.
//! Rather than re-parsing defensively in every consumer, the value is
//! resolved here: already structured → use it, string → parse it, anything
//! else or a parse failure → empty default. Normalization never errors.

use serde::de::DeserializeOwned;
use serde_json::Value;

use folio_core::domain::{Comment, OgpData, PortfolioEntry};

use crate::api::RawEntry;

/// Resolve a raw value that may be structured, stringified, or absent.
fn value_or_parse<T: DeserializeOwned + Default>(value: Value) -> T {
    match value {
        Value::Null => T::default(),
        Value::String(text) => serde_json::from_str(&text).unwrap_or_default(),
        other => serde_json::from_value(other).unwrap_or_default(),
    }
}

pub fn normalize_entry(raw: RawEntry) -> PortfolioEntry {
    let comments: Vec<Comment> = value_or_parse(raw.comments);
    let ogp: OgpData = value_or_parse(raw.ogp_data);

    PortfolioEntry {
        id: raw.id,
        title: raw.title,
        description: raw.description,
        url: raw.url,
        industry: raw.industry,
        experience: raw.experience,
        color: raw.color,
        comments,
        likes: raw.likes,
        ogp,
    }
}

pub fn normalize_entries(raw: Vec<RawEntry>) -> Vec<PortfolioEntry> {
    raw.into_iter().map(normalize_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(comments: Value, ogp_data: Value) -> RawEntry {
        serde_json::from_value(json!({
            "id": 1,
            "title": "t",
            "url": "https://example.com",
            "industry": "その他",
            "experience": "1年未満",
            "color": "黒",
            "comments": comments,
            "ogp_data": ogp_data,
        }))
        .unwrap()
    }

    #[test]
    fn structured_values_pass_through() {
        let entry = normalize_entry(raw(
            json!([{"id": 1, "content": "素敵", "created_at": "2024-06-01T12:00:00Z"}]),
            json!({"image": "https://img", "description": "desc"}),
        ));
        assert_eq!(entry.comments_count(), 1);
        assert_eq!(entry.comments[0].content, "素敵");
        assert_eq!(entry.ogp.image.as_deref(), Some("https://img"));
    }

    #[test]
    fn stringified_values_are_parsed() {
        let entry = normalize_entry(raw(
            json!("[{\"id\": 2, \"content\": \"参考になる\", \"created_at\": \"2024-06-02T00:00:00Z\"}]"),
            json!("{\"image\": \"https://img2\"}"),
        ));
        assert_eq!(entry.comments_count(), 1);
        assert_eq!(entry.ogp.image.as_deref(), Some("https://img2"));
        assert!(entry.ogp.description.is_none());
    }

    #[test]
    fn garbage_and_absent_values_default_to_empty() {
        let entry = normalize_entry(raw(json!("not json {{{"), Value::Null));
        assert_eq!(entry.comments_count(), 0);
        assert!(entry.ogp.image.is_none());

        let entry = normalize_entry(raw(json!(42), json!(["wrong", "shape"])));
        assert_eq!(entry.comments_count(), 0);
        assert!(entry.ogp.description.is_none());
    }
}
