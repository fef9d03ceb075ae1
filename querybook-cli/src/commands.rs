use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use querybook_core::markup::{highlight_formulas, print_document, strip_tags};
use querybook_core::share::{SharePlatform, post_link, share_url};
use querybook_core::theme::{CustomColors, ThemePreference, ThemePreset};
use querybook_core::{Direction, Post, PostQuery, PostStore, RELATED_LIMIT, SortKey, validate};
use tracing::{debug, info, warn};

fn summary_line(post: &Post) -> String {
    format!(
        "- [{}] {} ({}, {}, {} min read)",
        post.id,
        post.title,
        post.badge(),
        post.display_date(),
        post.reading_time()
    )
}

pub fn list(
    store: &PostStore,
    search: String,
    category: String,
    sort: SortKey,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let posts = store.filter_and_sort(&PostQuery::new(search, category, sort));
    if json {
        serde_json::to_writer_pretty(&mut *out, &posts)?;
        writeln!(out)?;
        return Ok(());
    }
    if posts.is_empty() {
        writeln!(out, "No posts found matching your criteria.")?;
        return Ok(());
    }
    writeln!(out, "Posts ({})", posts.len())?;
    for post in &posts {
        writeln!(out, "{}", summary_line(post))?;
    }
    Ok(())
}

pub fn show(store: &PostStore, id: &str, page_url: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let post = store.get(id)?;
    debug!(%post, "showing post");

    writeln!(out, "{}", post.title)?;
    writeln!(out, "{} | {} | {} min read", post.badge(), post.display_date(), post.reading_time())?;
    if !post.tags.is_empty() {
        writeln!(out, "Tags: {}", post.tags.join(", "))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", strip_tags(&post.content).split_whitespace().collect::<Vec<_>>().join(" "))?;
    writeln!(out)?;

    writeln!(out, "Related:")?;
    let related = store.related(post, RELATED_LIMIT);
    if related.is_empty() {
        writeln!(out, "  No related posts found.")?;
    }
    for other in related {
        writeln!(out, "  [{}] {}", other.id, other.title)?;
    }

    for (label, direction) in [("Previous", Direction::Previous), ("Next", Direction::Next)] {
        if let Some(other) = store.adjacent(&post.id, direction) {
            writeln!(out, "{}: [{}] {}", label, other.id, other.title)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Link: {}", post_link(page_url, &post.id)?)?;
    for platform in [SharePlatform::Twitter, SharePlatform::LinkedIn] {
        writeln!(out, "{}: {}", platform, share_url(platform, post, page_url))?;
    }
    Ok(())
}

pub fn share(
    store: &PostStore,
    id: &str,
    platform: SharePlatform,
    page_url: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let post = store.get(id)?;
    writeln!(out, "{}", share_url(platform, post, page_url))?;
    Ok(())
}

/// Reports problems in the raw resource. Fails when any are found.
pub fn check(posts: &[Post], out: &mut impl Write) -> anyhow::Result<()> {
    let issues = validate(posts);
    for issue in &issues {
        warn!(%issue, "catalog issue");
        writeln!(out, "{}", issue)?;
    }
    if !issues.is_empty() {
        bail!("{} issue(s) found in {} posts", issues.len(), posts.len());
    }
    writeln!(out, "{} posts, no issues", posts.len())?;
    Ok(())
}

pub fn theme(
    preset: Option<ThemePreset>,
    primary: Option<String>,
    accent: Option<String>,
    background: Option<String>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let preference = if primary.is_none() && accent.is_none() && background.is_none() {
        ThemePreference::Preset(preset.unwrap_or_default())
    } else {
        if preset.is_some() {
            bail!("a preset cannot be combined with custom colours");
        }
        let defaults = CustomColors::default();
        ThemePreference::Custom(CustomColors {
            primary: primary.unwrap_or(defaults.primary),
            accent: accent.unwrap_or(defaults.accent),
            background: background.unwrap_or(defaults.background),
        })
    };
    let palette = preference.palette()?;
    write!(out, "{}", palette.to_css())?;
    Ok(())
}

pub fn print(store: &PostStore, id: &str, target: Option<&Path>, out: &mut impl Write) -> anyhow::Result<()> {
    let post = store.get(id)?;
    let document = print_document(&post.title, &highlight_formulas(&post.content));
    match target {
        Some(path) => {
            std::fs::write(path, document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "print document written");
        }
        None => out.write_all(document.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PostStore {
        PostStore::from_json(
            r#"[
                {"id":"a","title":"Alpha","date":"2024-01-05","type":"tip","excerpt":"first","content":"<p>one two</p>","tags":["x"]},
                {"id":"b","title":"Beta","date":"2024-02-01","type":"guide","excerpt":"second","content":"<pre><code>=SUM(A1)</code></pre>"},
                {"id":"c","title":"Gamma","date":"bad","type":"tip","excerpt":"third","content":""}
            ]"#,
        )
        .unwrap()
    }

    fn render(run: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn list_filters_by_category() {
        let text = render(|out| list(&store(), String::new(), "tip".into(), SortKey::Newest, false, out));
        assert!(text.starts_with("Posts (2)"));
        assert!(text.contains("[a] Alpha"));
        assert!(!text.contains("[b]"));
    }

    #[test]
    fn list_reports_empty_results() {
        let text = render(|out| list(&store(), "zzz".into(), String::new(), SortKey::Newest, false, out));
        assert_eq!(text.trim(), "No posts found matching your criteria.");
    }

    #[test]
    fn list_emits_json() {
        let text = render(|out| list(&store(), String::new(), String::new(), SortKey::Title, true, out));
        let posts: Vec<Post> = serde_json::from_str(&text).unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn show_includes_navigation_and_links() {
        let text = render(|out| show(&store(), "b", "https://site.test/blog/", out));
        assert!(text.contains("Previous: [a] Alpha"));
        assert!(text.contains("Next: [c] Gamma"));
        assert!(text.contains("Link: https://site.test/blog/?post=b"));
        assert!(text.contains("linkedin.com"));
    }

    #[test]
    fn show_unknown_post_fails() {
        let mut out = Vec::new();
        assert!(show(&store(), "missing", "https://site.test/", &mut out).is_err());
    }

    #[test]
    fn share_prints_a_single_intent_url() {
        let text = render(|out| share(&store(), "a", SharePlatform::Twitter, "https://site.test/", out));
        assert!(text.starts_with("https://twitter.com/intent/tweet?text=Alpha%3A%20first"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn check_flags_bad_dates() {
        let posts = store().posts().to_vec();
        let mut out = Vec::new();
        assert!(check(&posts, &mut out).is_err());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"c\""));
    }

    #[test]
    fn theme_prints_preset_variables() {
        let text = render(|out| theme(Some(ThemePreset::Blue), None, None, None, out));
        assert!(text.contains("--excel-green: #2171b5;"));
    }

    #[test]
    fn theme_custom_fills_missing_colours() {
        let text = render(|out| theme(None, Some("#217346".into()), None, None, out));
        assert!(text.contains("--excel-dark-green: #004013;"));
        assert!(text.contains("--excel-accent: #4472c4;"));
    }

    #[test]
    fn theme_rejects_bad_colour() {
        let mut out = Vec::new();
        assert!(theme(None, Some("green".into()), None, None, &mut out).is_err());
    }

    #[test]
    fn print_writes_highlighted_document() {
        let text = render(|out| print(&store(), "b", None, out));
        assert!(text.contains("<title>Beta</title>"));
        assert!(text.contains(r#"<span class="text-primary fw-bold">SUM</span>"#));
    }
}
