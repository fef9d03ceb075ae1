use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("post not found: {0}")]
    PostNotFound(String),
    #[error("could not load posts: {0}")]
    Load(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("invalid page url: {0}")]
    InvalidUrl(String),
    #[error("{0} is not available in this build")]
    Unavailable(&'static str),
}

impl DomainError {
    /// Message shown to the reader in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            DomainError::PostNotFound(_) => "Post not found. Please try another post.".to_string(),
            DomainError::Load(_) => "Failed to load posts. Please refresh the page.".to_string(),
            DomainError::Storage(_) => "Theme settings could not be read or saved.".to_string(),
            DomainError::InvalidColor(color) => format!("\"{}\" is not a valid color.", color),
            DomainError::InvalidUrl(_) => "Failed to build a link for this post.".to_string(),
            DomainError::Unavailable(feature) => {
                format!("{} needs a server-side service and is not available.", feature)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_feature_has_clear_message() {
        let err = DomainError::Unavailable("PDF download");
        assert_eq!(err.to_string(), "PDF download is not available in this build");
        assert!(err.user_message().contains("not available"));
    }

    #[test]
    fn not_found_message_names_the_post() {
        let err = DomainError::PostNotFound("xlookup-basics".into());
        assert_eq!(err.to_string(), "post not found: xlookup-basics");
    }
}
