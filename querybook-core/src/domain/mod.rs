pub mod error;
pub mod post;
