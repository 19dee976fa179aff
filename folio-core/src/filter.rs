//! Filter engine — criteria applied conjunctively over the entry list.
//!
//! All four fields are optional in the "empty string means unconstrained"
//! sense the search panel uses. The filter is stable: output preserves the
//! input order and never re-sorts.

use serde::{Deserialize, Serialize};

use crate::domain::PortfolioEntry;

/// User-selected constraints narrowing the displayed entry list.
///
/// An empty field imposes no constraint. Keyword matches title OR
/// description, case-insensitively; the other three are exact matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub keyword: String,
    pub industry: String,
    pub experience: String,
    pub color: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty()
            && self.industry.is_empty()
            && self.experience.is_empty()
            && self.color.is_empty()
    }

    /// Whether an entry satisfies every non-empty field.
    pub fn matches(&self, entry: &PortfolioEntry) -> bool {
        self.matches_keyword(entry)
            && (self.industry.is_empty() || entry.industry == self.industry)
            && (self.experience.is_empty() || entry.experience == self.experience)
            && (self.color.is_empty() || entry.color == self.color)
    }

    fn matches_keyword(&self, entry: &PortfolioEntry) -> bool {
        if self.keyword.is_empty() {
            return true;
        }
        let needle = self.keyword.to_lowercase();
        // A missing title or description is non-matching for that field,
        // not an error.
        contains_ci(entry.title.as_deref(), &needle)
            || contains_ci(entry.description.as_deref(), &needle)
    }
}

fn contains_ci(haystack: Option<&str>, lowered_needle: &str) -> bool {
    haystack
        .map(|text| text.to_lowercase().contains(lowered_needle))
        .unwrap_or(false)
}

/// Stable conjunctive filter over the full list.
pub fn filter_entries<'a>(
    entries: &'a [PortfolioEntry],
    criteria: &FilterCriteria,
) -> Vec<&'a PortfolioEntry> {
    entries.iter().filter(|e| criteria.matches(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OgpData;

    fn entry(id: u64, title: &str, description: &str, industry: &str) -> PortfolioEntry {
        PortfolioEntry {
            id,
            title: Some(title.into()),
            description: Some(description.into()),
            url: format!("https://example.com/{id}"),
            industry: industry.into(),
            experience: "1-3年".into(),
            color: "白".into(),
            comments: vec![],
            likes: vec![],
            ogp: OgpData::default(),
        }
    }

    fn sample_list() -> Vec<PortfolioEntry> {
        vec![
            entry(1, "Minimal Works", "白基調のポートフォリオ", "デザイナー"),
            entry(2, "Motion Reel", "アニメーション中心", "動画編集者 / モーションデザイナー"),
            entry(3, "Photo Archive", "風景写真", "フォトグラファー"),
            entry(4, "UI Showcase", "minimalなUIデザイン", "デザイナー"),
            entry(5, "Dev Portfolio", "Rustとweb", "バックエンドエンジニア"),
        ]
    }

    #[test]
    fn empty_criteria_is_identity() {
        let list = sample_list();
        let out = filter_entries(&list, &FilterCriteria::default());
        assert_eq!(out.len(), list.len());
        let ids: Vec<u64> = out.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn keyword_is_case_insensitive_over_title_and_description() {
        let list = sample_list();
        let criteria = FilterCriteria {
            keyword: "MINIMAL".into(),
            ..Default::default()
        };
        let ids: Vec<u64> = filter_entries(&list, &criteria).iter().map(|e| e.id).collect();
        // id 1 matches in the title, id 4 in the description.
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn industry_filter_is_exact_and_order_preserving() {
        let list = sample_list();
        let criteria = FilterCriteria {
            industry: "デザイナー".into(),
            ..Default::default()
        };
        let ids: Vec<u64> = filter_entries(&list, &criteria).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 4]);

        // Prefix of a known industry must not match.
        let criteria = FilterCriteria {
            industry: "デザ".into(),
            ..Default::default()
        };
        assert!(filter_entries(&list, &criteria).is_empty());
    }

    #[test]
    fn fields_combine_conjunctively() {
        let list = sample_list();
        let criteria = FilterCriteria {
            keyword: "minimal".into(),
            industry: "デザイナー".into(),
            color: "白".into(),
            ..Default::default()
        };
        let ids: Vec<u64> = filter_entries(&list, &criteria).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 4]);

        let criteria = FilterCriteria {
            keyword: "minimal".into(),
            industry: "フォトグラファー".into(),
            ..Default::default()
        };
        assert!(filter_entries(&list, &criteria).is_empty());
    }

    #[test]
    fn missing_title_or_description_is_non_matching_not_a_panic() {
        let mut list = sample_list();
        list[0].title = None;
        list[1].description = None;
        list[2].title = None;
        list[2].description = None;

        let criteria = FilterCriteria {
            keyword: "photo".into(),
            ..Default::default()
        };
        // Entry 3 has neither field, so even though its url mentions nothing,
        // the pass completes and excludes it.
        let ids: Vec<u64> = filter_entries(&list, &criteria).iter().map(|e| e.id).collect();
        assert!(!ids.contains(&3));
    }

    #[test]
    fn keyword_matches_description_when_title_is_missing() {
        let mut list = sample_list();
        list[0].title = None;
        let criteria = FilterCriteria {
            keyword: "白基調".into(),
            ..Default::default()
        };
        let ids: Vec<u64> = filter_entries(&list, &criteria).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
