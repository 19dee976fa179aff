//! Plain-text rendering of entries and the pagination control.

use folio_core::{PageLabel, Pagination, PortfolioEntry, User};

/// One entry as a text card.
pub fn card(entry: &PortfolioEntry, viewer: Option<&User>) -> String {
    let liked = viewer
        .map(|user| entry.is_liked_by(user.id))
        .unwrap_or(false);
    let heart = if liked { "♥" } else { "♡" };

    let mut out = String::new();
    out.push_str(&format!("#{} {}\n", entry.id, entry.display_title()));
    out.push_str(&format!("  {}\n", entry.url));
    out.push_str(&format!("  {}\n", entry.display_description()));
    out.push_str(&format!(
        "  業界: {} | 経験年数: {} | メインカラー: {}\n",
        entry.industry, entry.experience, entry.color
    ));
    out.push_str(&format!(
        "  {heart} {}  💬 {}\n",
        entry.likes_count(),
        entry.comments_count()
    ));
    out
}

/// The pagination control line, or `None` when it should not render.
pub fn pagination_line(p: &Pagination) -> Option<String> {
    if !p.should_render() {
        return None;
    }

    let mut parts: Vec<String> = Vec::new();
    if p.has_prev {
        parts.push("prev".into());
    }
    for label in &p.labels {
        match label {
            PageLabel::Page(n) if *n == p.current => parts.push(format!("[{n}]")),
            PageLabel::Page(n) => parts.push(n.to_string()),
            PageLabel::Ellipsis => parts.push("...".into()),
        }
    }
    if p.has_next {
        parts.push("next".into());
    }
    Some(parts.join(" "))
}
