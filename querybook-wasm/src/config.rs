const DEFAULT_POSTS_URL: &str = "/assets/js/posts.json";

pub const SEARCH_DEBOUNCE_MS: u32 = 300;
pub const BANNER_TIMEOUT_MS: u32 = 5_000;
pub const NAVIGATE_DELAY_MS: u32 = 300;
pub const COPY_CONFIRM_MS: u32 = 2_000;
pub const PRINT_DELAY_MS: u32 = 250;
pub const RELATED_TEASER_CHARS: usize = 80;

/// Location of the post resource. Set `QUERYBOOK_POSTS_URL` at build time to override.
pub fn posts_url() -> &'static str {
    option_env!("QUERYBOOK_POSTS_URL").unwrap_or(DEFAULT_POSTS_URL)
}
