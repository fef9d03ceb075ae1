use anyhow::anyhow;

const DEFAULT_POSTS: &str = "assets/js/posts.json";
const DEFAULT_PAGE_URL: &str = "http://localhost:8080/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// File path or http(s) URL of the post resource.
    pub posts: String,
    /// Page the share and copy links point at.
    pub page_url: String,
    pub log_json: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let posts = std::env::var("QUERYBOOK_POSTS").unwrap_or_else(|_| DEFAULT_POSTS.into());
        let page_url =
            std::env::var("QUERYBOOK_PAGE_URL").unwrap_or_else(|_| DEFAULT_PAGE_URL.into());
        let log_json = match std::env::var("QUERYBOOK_LOG_JSON") {
            Ok(value) => parse_flag(&value)
                .ok_or_else(|| anyhow!("invalid QUERYBOOK_LOG_JSON: {}", value))?,
            Err(_) => false,
        };

        Ok(Self {
            posts,
            page_url,
            log_json,
        })
    }

    /// Command-line values win over the environment.
    pub fn with_overrides(mut self, posts: Option<String>, page_url: Option<String>) -> Self {
        if let Some(posts) = posts {
            self.posts = posts;
        }
        if let Some(page_url) = page_url {
            self.page_url = page_url;
        }
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
