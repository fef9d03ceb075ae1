use anyhow::Context;
use querybook_core::{Post, PostStore};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSource {
    File(String),
    Http(String),
}

impl PostSource {
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            PostSource::Http(location.to_string())
        } else {
            PostSource::File(location.to_string())
        }
    }

    #[instrument(skip(self), fields(source = ?self))]
    pub async fn read(&self) -> anyhow::Result<String> {
        let body = match self {
            PostSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read {}", path))?,
            PostSource::Http(url) => reqwest::get(url)
                .await
                .with_context(|| format!("failed to fetch {}", url))?
                .error_for_status()
                .with_context(|| format!("{} answered with an error status", url))?
                .text()
                .await
                .context("failed to read response body")?,
        };
        info!(bytes = body.len(), "post resource read");
        Ok(body)
    }
}

/// Posts exactly as they appear in the resource, duplicates included.
pub fn parse_raw(json: &str) -> anyhow::Result<Vec<Post>> {
    serde_json::from_str(json).context("post resource is not a valid post array")
}

pub async fn load_store(source: &PostSource) -> anyhow::Result<PostStore> {
    let json = source.read().await?;
    let store = PostStore::from_json(&json)?;
    info!(count = store.len(), "posts loaded");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_and_paths_are_told_apart() {
        assert_eq!(
            PostSource::parse("https://example.com/posts.json"),
            PostSource::Http("https://example.com/posts.json".into())
        );
        assert_eq!(
            PostSource::parse("assets/js/posts.json"),
            PostSource::File("assets/js/posts.json".into())
        );
    }

    #[test]
    fn raw_parse_keeps_duplicates() {
        let json = r#"[
            {"id":"a","title":"A","date":"2024-01-01","type":"tip","excerpt":"","content":""},
            {"id":"a","title":"A again","date":"2024-01-02","type":"tip","excerpt":"","content":""}
        ]"#;
        let posts = parse_raw(json).unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn raw_parse_rejects_non_arrays() {
        assert!(parse_raw(r#"{"posts": []}"#).is_err());
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let source = PostSource::File("does/not/exist.json".into());
        assert!(load_store(&source).await.is_err());
    }
}
