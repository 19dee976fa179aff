//! Property tests for the filter and paginator invariants.
//!
//! Uses proptest to verify:
//! 1. Pagination partitions — pages neither drop nor duplicate entries
//! 2. Slice length is bounded by the page size
//! 3. The label row stays short regardless of total pages
//! 4. The filter never keeps an entry the criteria reject, and vice versa

use proptest::prelude::*;
use folio_core::domain::{OgpData, PortfolioEntry};
use folio_core::{filter_entries, page_labels, page_slice, total_pages, FilterCriteria, PageLabel};

fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[a-zA-Z ぁ-ん]{0,20}".prop_map(Some),
    ]
}

fn arb_entry(id: u64) -> impl Strategy<Value = PortfolioEntry> {
    (arb_text(), arb_text(), prop::sample::select(vec!["デザイナー", "その他"])).prop_map(
        move |(title, description, industry)| PortfolioEntry {
            id,
            title,
            description,
            url: format!("https://example.com/{id}"),
            industry: industry.into(),
            experience: "1-3年".into(),
            color: "白".into(),
            comments: vec![],
            likes: vec![],
            ogp: OgpData::default(),
        },
    )
}

fn arb_entries() -> impl Strategy<Value = Vec<PortfolioEntry>> {
    prop::collection::vec(arb_entry(0), 0..60).prop_map(|mut entries| {
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.id = i as u64 + 1;
        }
        entries
    })
}

proptest! {
    /// Concatenating every page slice reproduces the input exactly:
    /// nothing dropped, nothing duplicated, order intact.
    #[test]
    fn pages_partition_the_list(
        n in 0usize..200,
        size in 1usize..20,
    ) {
        let items: Vec<usize> = (0..n).collect();
        let total = total_pages(n, size);

        let mut seen = Vec::new();
        for page in 1..=total {
            let slice = page_slice(&items, size, page);
            prop_assert!(slice.len() <= size);
            seen.extend_from_slice(slice);
        }
        prop_assert_eq!(seen, items);
    }

    /// Out-of-range pages are empty, never an error.
    #[test]
    fn out_of_range_page_is_empty(
        n in 0usize..100,
        size in 1usize..20,
        beyond in 1usize..10,
    ) {
        let items: Vec<usize> = (0..n).collect();
        let total = total_pages(n, size);
        prop_assert!(page_slice(&items, size, total + beyond).is_empty());
    }

    /// The label row is bounded and anchored: at most 9 cells, and when
    /// there is more than one page it starts at 1 and ends at the last page.
    #[test]
    fn labels_are_bounded_and_anchored(
        total in 1usize..500,
        current in 1usize..500,
    ) {
        let current = current.min(total);
        let labels = page_labels(total, current);
        prop_assert!(labels.len() <= 9);
        prop_assert!(labels.contains(&PageLabel::Page(current)));

        if total > 1 {
            prop_assert_eq!(labels.first(), Some(&PageLabel::Page(1)));
            prop_assert_eq!(labels.last(), Some(&PageLabel::Page(total)));
        }

        // Page numbers strictly increase left to right.
        let pages: Vec<usize> = labels
            .iter()
            .filter_map(|l| match l {
                PageLabel::Page(p) => Some(*p),
                PageLabel::Ellipsis => None,
            })
            .collect();
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
    }

    /// Keyword filtering splits the list cleanly: every kept entry matches,
    /// no excluded entry does, and the pass never panics on missing fields.
    #[test]
    fn keyword_filter_is_a_clean_split(
        entries in arb_entries(),
        keyword in "[a-zA-Zぁ-ん]{1,5}",
    ) {
        let criteria = FilterCriteria { keyword: keyword.clone(), ..Default::default() };
        let kept = filter_entries(&entries, &criteria);

        let needle = keyword.to_lowercase();
        let matches = |e: &PortfolioEntry| {
            e.title.as_deref().is_some_and(|t| t.to_lowercase().contains(&needle))
                || e.description.as_deref().is_some_and(|d| d.to_lowercase().contains(&needle))
        };

        for entry in &kept {
            prop_assert!(matches(entry));
        }
        let kept_ids: Vec<u64> = kept.iter().map(|e| e.id).collect();
        for entry in &entries {
            if !kept_ids.contains(&entry.id) {
                prop_assert!(!matches(entry));
            }
        }
    }

    /// Empty criteria are the identity filter.
    #[test]
    fn empty_criteria_identity(entries in arb_entries()) {
        let kept = filter_entries(&entries, &FilterCriteria::default());
        prop_assert_eq!(kept.len(), entries.len());
        for (kept_entry, original) in kept.iter().zip(entries.iter()) {
            prop_assert_eq!(kept_entry.id, original.id);
        }
    }
}
