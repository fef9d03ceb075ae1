use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDateTime;
use derive_more::Display;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::post::Post;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum SortKey {
    #[default]
    #[display("newest")]
    Newest,
    #[display("oldest")]
    Oldest,
    #[display("title")]
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Newest, SortKey::Oldest, SortKey::Title];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
            SortKey::Title => "Title A-Z",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "title" => Ok(SortKey::Title),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

/// Current state of the search box, category select and sort select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub search: String,
    pub category: String,
    pub sort: SortKey,
}

impl PostQuery {
    pub fn new(search: impl Into<String>, category: impl Into<String>, sort: SortKey) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
            sort,
        }
    }

    pub fn apply(&self, posts: &[Post]) -> Vec<Post> {
        let needle = self.search.to_lowercase();
        let mut selected: Vec<Post> = posts
            .iter()
            .filter(|post| post.matches_search(&needle) && post.matches_category(&self.category))
            .cloned()
            .collect();

        // `sort_by` is stable, so ties keep store order.
        match self.sort {
            SortKey::Newest => selected.sort_by(|a, b| compare_dates(b, a)),
            SortKey::Oldest => selected.sort_by(compare_dates),
            SortKey::Title => selected.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        }
        selected
    }
}

/// Parsed dates compare chronologically. Dates that fail to parse compare by
/// raw string among themselves and rank older than any parsed date, which
/// keeps the ordering total.
fn compare_dates(a: &Post, b: &Post) -> Ordering {
    date_key(a).cmp(&date_key(b))
}

fn date_key(post: &Post) -> (Option<NaiveDateTime>, &str) {
    (post.parsed_date(), post.date.as_str())
}

/// Lowercased with accents folded, so `éclair` files under `e`.
fn collation_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Folded key first, then case-insensitive, then byte order.
fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}
