use chrono::{DateTime, NaiveDate, NaiveDateTime};
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};

use crate::markup;

const WORDS_PER_MINUTE: usize = 200;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("Post {{ id: {}, title: {}, type: {} }}", id, title, category)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(rename = "type")]
    pub category: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parses the loosely formatted dates found in the post resource.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `Jan 5, 2024`, or the raw string when it does not parse.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Minutes needed to read an HTML fragment, never less than one.
pub fn reading_time_minutes(content: &str) -> usize {
    let words = markup::strip_tags(content).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

impl Post {
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }

    pub fn display_date(&self) -> String {
        format_date(&self.date)
    }

    pub fn badge(&self) -> String {
        self.category.to_uppercase()
    }

    pub fn reading_time(&self) -> usize {
        reading_time_minutes(&self.content)
    }

    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    pub fn matches_category(&self, category: &str) -> bool {
        category.is_empty() || self.category == category
    }

    /// Shortened excerpt for related-post cards.
    pub fn teaser(&self, max_chars: usize) -> String {
        let short: String = self.excerpt.chars().take(max_chars).collect();
        format!("{}...", short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post_from(value: serde_json::Value) -> Post {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn deserializes_optional_fields() {
        let post = post_from(json!({
            "id": "vlookup",
            "title": "VLOOKUP in practice",
            "date": "2024-03-01",
            "type": "formula",
            "excerpt": "Find things",
            "content": "<p>body</p>",
            "tags": null,
            "views": 12
        }));
        assert!(post.tags.is_empty());
        assert!(post.thumbnail.is_none());
        assert_eq!(post.badge(), "FORMULA");

        let post = post_from(json!({
            "id": "pivot",
            "title": "Pivot tables",
            "date": "2024-03-02",
            "type": "tutorial",
            "excerpt": "Summaries",
            "content": "",
            "tags": ["pivot", "summary"],
            "thumbnail": "img/pivot.png"
        }));
        assert_eq!(post.tags, vec!["pivot", "summary"]);
        assert_eq!(post.thumbnail.as_deref(), Some("img/pivot.png"));
    }

    #[test]
    fn parses_common_date_shapes() {
        assert!(parse_date("2024-01-15").is_some());
        assert!(parse_date("2024-01-15T10:30:00Z").is_some());
        assert!(parse_date("2024-01-15T10:30:00").is_some());
        assert!(parse_date("January 15, 2024").is_some());
        assert!(parse_date("sometime last week").is_none());
    }

    #[test]
    fn formats_dates_and_keeps_unparseable_ones() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn reading_time_rounds_up_and_floors_at_one() {
        let long = format!("<p>{}</p>", "word ".repeat(250));
        assert_eq!(reading_time_minutes(&long), 2);
        assert_eq!(reading_time_minutes("<p>just a few words</p>"), 1);
        assert_eq!(reading_time_minutes(""), 1);
        let exact = format!("<div>{}</div>", "word ".repeat(400));
        assert_eq!(reading_time_minutes(&exact), 2);
    }

    #[test]
    fn reading_time_does_not_count_markup() {
        let content = format!("<p class=\"lead long attribute list\">{}</p>", "word ".repeat(200));
        assert_eq!(reading_time_minutes(&content), 1);
    }

    #[test]
    fn search_checks_title_excerpt_and_tags() {
        let post = post_from(json!({
            "id": "a",
            "title": "Dynamic Arrays",
            "date": "2024-01-01",
            "type": "formula",
            "excerpt": "Spill ranges explained",
            "content": "",
            "tags": ["FILTER", "Sort"]
        }));
        assert!(post.matches_search(""));
        assert!(post.matches_search("dynamic"));
        assert!(post.matches_search("spill"));
        assert!(post.matches_search("filter"));
        assert!(!post.matches_search("vba"));
    }

    #[test]
    fn teaser_truncates_on_char_boundaries() {
        let post = post_from(json!({
            "id": "a",
            "title": "t",
            "date": "2024-01-01",
            "type": "tip",
            "excerpt": "ééééé",
            "content": ""
        }));
        assert_eq!(post.teaser(3), "ééé...");
    }

    #[test]
    fn display_names_id_title_and_type() {
        let post = post_from(json!({
            "id": "xl",
            "title": "XLOOKUP",
            "date": "2024-01-01",
            "type": "formula",
            "excerpt": "",
            "content": ""
        }));
        assert_eq!(post.to_string(), "Post { id: xl, title: XLOOKUP, type: formula }");
    }
}
