//! Domain logic for the Excel Query Book front end: the post catalog,
//! filtering and sorting, the detail overlay state, sharing and themes.
//!
//! Nothing here touches the browser, so the web app and the CLI share it.

pub mod application;
pub mod domain;
pub mod markup;
pub mod share;
pub mod theme;

pub use application::detail::{DetailState, KeyCommand};
pub use application::post_store::{CatalogIssue, Direction, PostStore, RELATED_LIMIT, validate};
pub use application::query::{PostQuery, SortKey};
pub use domain::error::DomainError;
pub use domain::post::{Post, format_date, parse_date, reading_time_minutes};
