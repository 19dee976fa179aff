//! PortfolioEntry — the fundamental gallery unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted portfolio site with its descriptive metadata.
///
/// Entries are created server-side and never mutated in place: after any
/// like/comment/create the whole list is refetched, so local copies are
/// always a snapshot of server state.
///
/// `title` and `description` are optional because the backend has shipped
/// entries without them; a missing field must degrade (non-matching in the
/// filter, placeholder in rendering), never error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub industry: String,
    pub experience: String,
    pub color: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub ogp: OgpData,
}

impl PortfolioEntry {
    pub fn likes_count(&self) -> usize {
        self.likes.len()
    }

    pub fn comments_count(&self) -> usize {
        self.comments.len()
    }

    /// Whether the given user has already liked this entry.
    ///
    /// Uniqueness per (user, entry) is enforced server-side; this only
    /// inspects the snapshot.
    pub fn is_liked_by(&self, user_id: u64) -> bool {
        self.likes.iter().any(|like| like.user_id == user_id)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(無題)")
    }

    /// Description for display: entry description, else the OGP description
    /// scraped from the linked site, else a placeholder.
    pub fn display_description(&self) -> &str {
        self.description
            .as_deref()
            .or(self.ogp.description.as_deref())
            .unwrap_or("説明なし")
    }
}

/// A comment on an entry. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A like: associates a user with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user_id: u64,
}

/// Open Graph preview data for the linked external site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OgpData {
    pub image: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> PortfolioEntry {
        PortfolioEntry {
            id: 1,
            title: Some("ミニマルな作品集".into()),
            description: Some("白基調のポートフォリオ".into()),
            url: "https://example.com".into(),
            industry: "デザイナー".into(),
            experience: "1-3年".into(),
            color: "白".into(),
            comments: vec![],
            likes: vec![Like { user_id: 7 }],
            ogp: OgpData::default(),
        }
    }

    #[test]
    fn liked_by_matches_user_id() {
        let entry = sample_entry();
        assert!(entry.is_liked_by(7));
        assert!(!entry.is_liked_by(8));
        assert_eq!(entry.likes_count(), 1);
    }

    #[test]
    fn display_description_falls_back_to_ogp() {
        let mut entry = sample_entry();
        entry.description = None;
        entry.ogp.description = Some("OGPの説明".into());
        assert_eq!(entry.display_description(), "OGPの説明");

        entry.ogp.description = None;
        assert_eq!(entry.display_description(), "説明なし");
    }

    #[test]
    fn entry_serialization_roundtrip() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let deser: PortfolioEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deser.id, entry.id);
        assert_eq!(deser.title, entry.title);
        assert_eq!(deser.likes_count(), 1);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let json = r#"{
            "id": 2,
            "title": null,
            "description": null,
            "url": "https://example.net",
            "industry": "その他",
            "experience": "1年未満",
            "color": "黒"
        }"#;
        let entry: PortfolioEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.comments_count(), 0);
        assert_eq!(entry.likes_count(), 0);
        assert_eq!(entry.display_title(), "(無題)");
    }
}
