use std::str::FromStr;

use derive_more::Display;
use url::Url;

use crate::domain::error::DomainError;
use crate::domain::post::Post;

pub const POST_QUERY_PARAM: &str = "post";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SharePlatform {
    #[display("twitter")]
    Twitter,
    #[display("linkedin")]
    LinkedIn,
}

impl FromStr for SharePlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(SharePlatform::Twitter),
            "linkedin" => Ok(SharePlatform::LinkedIn),
            other => Err(format!("unknown share platform: {}", other)),
        }
    }
}

/// Share intent URL for `post`, pointing readers at `page_url`.
pub fn share_url(platform: SharePlatform, post: &Post, page_url: &str) -> String {
    let url = urlencoding::encode(page_url);
    match platform {
        SharePlatform::Twitter => {
            let text = format!("{}: {}", post.title, post.excerpt);
            format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                urlencoding::encode(&text),
                url
            )
        }
        SharePlatform::LinkedIn => {
            format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url)
        }
    }
}

/// `page_url` with its query and fragment replaced by `?post=<id>`.
pub fn post_link(page_url: &str, id: &str) -> Result<String, DomainError> {
    let mut url =
        Url::parse(page_url).map_err(|e| DomainError::InvalidUrl(format!("{}: {}", page_url, e)))?;
    url.set_fragment(None);
    url.set_query(None);
    url.query_pairs_mut().append_pair(POST_QUERY_PARAM, id);
    Ok(url.into())
}

/// Post id carried by a deep link, if any.
pub fn post_id_from_url(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == POST_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}
