//! Fixed enumerated sets for the three select-style filter fields.
//!
//! These mirror the choices offered in the gallery's search panel. The
//! server is authoritative; the client uses them to populate pickers and to
//! reject obviously malformed submissions before the round trip.

pub const INDUSTRIES: &[&str] = &[
    "デザイナー",
    "フロントエンドエンジニア",
    "バックエンドエンジニア",
    "動画編集者 / モーションデザイナー",
    "フォトグラファー",
    "イラストレーター",
    "その他",
];

pub const EXPERIENCE_BRACKETS: &[&str] = &["1年未満", "1-3年", "3-5年", "5-10年", "10年以上"];

pub const COLORS: &[&str] = &[
    "白",
    "黒",
    "グレー",
    "赤",
    "オレンジ",
    "茶",
    "黄",
    "緑",
    "青",
    "紫",
    "ピンク",
    "カラフル",
];

pub fn is_known_industry(value: &str) -> bool {
    INDUSTRIES.contains(&value)
}

pub fn is_known_experience(value: &str) -> bool {
    EXPERIENCE_BRACKETS.contains(&value)
}

pub fn is_known_color(value: &str) -> bool {
    COLORS.contains(&value)
}
