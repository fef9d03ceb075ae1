use crate::error::ClientError;
use async_trait::async_trait;
use gloo_net::http::Request;
use querybook_core::PostStore;
use tracing::{error, info, instrument};

#[async_trait(?Send)]
pub trait PostSource {
    async fn fetch_posts(&self) -> Result<PostStore, ClientError>;
}

/// Reads the post resource from a static JSON file next to the page.
#[derive(Clone)]
pub struct StaticPostSource {
    pub url: String,
}

impl StaticPostSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl PostSource for StaticPostSource {
    async fn fetch_posts(&self) -> Result<PostStore, ClientError> {
        let request = Request::get(&self.url)
            .header("Accept", "application/json")
            .header("Cache-Control", "no-cache")
            .build()?;
        let response = request.send().await?;

        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status,
                message: text,
            });
        }

        let body = response.text().await?;
        Ok(PostStore::from_json(&body)?)
    }
}

/// Loads the store once. On failure the error is logged and handed back
/// together with an empty store so the page can still render.
#[instrument(skip(source))]
pub async fn load_store<S: PostSource>(source: &S) -> (PostStore, Option<ClientError>) {
    match source.fetch_posts().await {
        Ok(store) => {
            info!(count = store.len(), "posts loaded");
            (store, None)
        }
        Err(err) => {
            error!(error = %err, "failed to load posts");
            (PostStore::default(), Some(err))
        }
    }
}
