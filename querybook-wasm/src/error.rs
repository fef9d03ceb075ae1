use querybook_core::DomainError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error(transparent)]
    RequestError(#[from] gloo_net::Error),
    #[error("browser error: {0}")]
    Browser(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ClientError {
    /// Message shown to the reader in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Domain(err) => err.user_message(),
            ClientError::Http { .. } | ClientError::RequestError(_) => {
                "Failed to load posts. Please refresh the page.".to_string()
            }
            ClientError::Browser(message) => message.clone(),
        }
    }
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ClientError::Browser(message)
    }
}
