//! Text helpers for post markup.
//!
//! Post bodies are trusted HTML fragments from the post resource and are
//! inserted as-is. Anything else interpolated into markup (titles, tags,
//! excerpts) goes through [`escape_html`] first.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static CODE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(<pre[^>]*>\s*<code[^>]*>)(.*?)(</code>)").expect("valid code block pattern")
});
static FORMULA_HEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(=)([A-Z]+)").expect("valid formula head pattern"));
static FUNCTION_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z_]+)(\()").expect("valid function call pattern"));
static STRUCTURED_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\[[^\]]+\])").expect("valid reference pattern"));

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Replaces every tag with a space so adjacent words stay apart.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, " ").into_owned()
}

/// Marks up spreadsheet formulas inside `<pre><code>` blocks.
pub fn highlight_formulas(html: &str) -> String {
    CODE_BLOCK
        .replace_all(html, |caps: &Captures| {
            let body = FORMULA_HEAD.replace_all(&caps[2], r#"$1<span class="text-primary fw-bold">$2</span>"#);
            let body = FUNCTION_CALL.replace_all(&body, r#"<span class="text-success fw-bold">$1</span>$2"#);
            let body = STRUCTURED_REF.replace_all(&body, r#"<span class="text-muted">$1</span>"#);
            format!("{}{}{}", &caps[1], body, &caps[3])
        })
        .into_owned()
}

/// Standalone printable page holding only the post body.
pub fn print_document(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
        body {{ padding: 20px; font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.6; }}
        pre, .code-block {{ background: #f8f9fa; padding: 10px; border-radius: 4px; margin: 10px 0; overflow-x: auto; }}
        img {{ max-width: 100%; height: auto; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        {content}
    </div>
</body>
</html>"#,
        title = escape_html(title),
        content = content,
    )
}
