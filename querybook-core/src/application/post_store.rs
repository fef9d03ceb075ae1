use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::application::query::PostQuery;
use crate::domain::error::DomainError;
use crate::domain::post::Post;

pub const RELATED_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// A problem found in a post resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    DuplicateId { id: String, index: usize },
    UnparseableDate { id: String, date: String },
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogIssue::DuplicateId { id, index } => {
                write!(f, "duplicate id {:?} at position {}", id, index)
            }
            CatalogIssue::UnparseableDate { id, date } => {
                write!(f, "post {:?} has an unparseable date {:?}", id, date)
            }
        }
    }
}

/// Checks a freshly loaded sequence without changing it.
pub fn validate(posts: &[Post]) -> Vec<CatalogIssue> {
    let mut seen = HashSet::new();
    let mut issues = Vec::new();
    for (index, post) in posts.iter().enumerate() {
        if !seen.insert(post.id.as_str()) {
            issues.push(CatalogIssue::DuplicateId {
                id: post.id.clone(),
                index,
            });
        }
        if post.parsed_date().is_none() {
            issues.push(CatalogIssue::UnparseableDate {
                id: post.id.clone(),
                date: post.date.clone(),
            });
        }
    }
    issues
}

/// The loaded posts, in resource order. Immutable once built and cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Arc<Vec<Post>>,
}

impl PartialEq for PostStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.posts, &other.posts) || self.posts == other.posts
    }
}

impl PostStore {
    /// Builds the store, keeping only the first post for any repeated id.
    pub fn new(posts: Vec<Post>) -> Self {
        let mut seen = HashSet::new();
        let total = posts.len();
        let posts: Vec<Post> = posts
            .into_iter()
            .filter(|post| {
                let fresh = seen.insert(post.id.clone());
                if !fresh {
                    warn!(id = %post.id, "dropping post with duplicate id");
                }
                fresh
            })
            .collect();
        debug!(loaded = total, kept = posts.len(), "post store built");
        Self {
            posts: Arc::new(posts),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let posts: Vec<Post> =
            serde_json::from_str(json).map_err(|e| DomainError::Load(e.to_string()))?;
        Ok(Self::new(posts))
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&Post, DomainError> {
        self.find(id)
            .ok_or_else(|| DomainError::PostNotFound(id.to_string()))
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }

    /// Neighbour of `id` in store order; `None` at either end or for unknown ids.
    pub fn adjacent(&self, id: &str, direction: Direction) -> Option<&Post> {
        let index = self.position(id)?;
        let target = match direction {
            Direction::Previous => index.checked_sub(1)?,
            Direction::Next => index + 1,
        };
        self.posts.get(target)
    }

    /// Up to `limit` posts sharing the category of `post`, in store order.
    pub fn related(&self, post: &Post, limit: usize) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|other| other.category == post.category && other.id != post.id)
            .take(limit)
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.posts
            .iter()
            .map(|post| post.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Derives a new filtered and sorted sequence. The store itself is untouched.
    pub fn filter_and_sort(&self, query: &PostQuery) -> Vec<Post> {
        query.apply(&self.posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, category: &str) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Title {}", id),
            date: "2024-01-01".to_string(),
            category: category.to_string(),
            excerpt: String::new(),
            content: String::new(),
            tags: Vec::new(),
            thumbnail: None,
        }
    }

    fn store() -> PostStore {
        PostStore::new(vec![
            post("a", "formula"),
            post("b", "tip"),
            post("c", "formula"),
            post("d", "formula"),
            post("e", "formula"),
        ])
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let mut second = post("a", "tip");
        second.title = "Second".into();
        let store = PostStore::new(vec![post("a", "formula"), second, post("b", "tip")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.find("a").map(|p| p.category.as_str()), Some("formula"));
    }

    #[test]
    fn adjacency_follows_store_order() {
        let store = store();
        assert!(store.adjacent("a", Direction::Previous).is_none());
        assert_eq!(store.adjacent("a", Direction::Next).map(|p| p.id.as_str()), Some("b"));
        assert_eq!(store.adjacent("c", Direction::Previous).map(|p| p.id.as_str()), Some("b"));
        assert!(store.adjacent("e", Direction::Next).is_none());
        assert!(store.adjacent("missing", Direction::Next).is_none());
    }

    #[test]
    fn related_is_same_category_capped_and_excludes_self() {
        let store = store();
        let current = store.find("c").cloned().unwrap();
        let ids: Vec<&str> = store
            .related(&current, RELATED_LIMIT)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "d", "e"]);

        let tip = store.find("b").cloned().unwrap();
        assert!(store.related(&tip, RELATED_LIMIT).is_empty());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        assert_eq!(store().categories(), vec!["formula", "tip"]);
    }

    #[test]
    fn get_reports_missing_ids() {
        let err = store().get("zzz").unwrap_err();
        assert_eq!(err, DomainError::PostNotFound("zzz".into()));
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        assert!(matches!(PostStore::from_json("{not json"), Err(DomainError::Load(_))));
        assert!(PostStore::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn validate_reports_duplicates_and_bad_dates() {
        let mut bad_date = post("b", "tip");
        bad_date.date = "soon".into();
        let issues = validate(&[post("a", "tip"), bad_date, post("a", "tip")]);
        assert_eq!(
            issues,
            vec![
                CatalogIssue::UnparseableDate {
                    id: "b".into(),
                    date: "soon".into()
                },
                CatalogIssue::DuplicateId {
                    id: "a".into(),
                    index: 2
                },
            ]
        );
    }
}
