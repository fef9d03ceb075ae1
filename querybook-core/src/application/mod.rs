pub mod detail;
pub mod post_store;
pub mod query;
