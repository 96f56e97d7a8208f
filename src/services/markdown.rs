use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::services::response_normalizer::sanitize_currency;

static H1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^# (.*)$").expect("H1 is a valid regex pattern"));
static H2: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^## (.*)$").expect("H2 is a valid regex pattern"));
static H3: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^### (.*)$").expect("H3 is a valid regex pattern"));
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("BOLD is a valid regex pattern"));
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("ITALIC is a valid regex pattern"));
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*-[ \t](.*)$").expect("LIST_ITEM is a valid regex pattern"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("LINK is a valid regex pattern"));
static BLOCK_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*</?(h|ul|ol|li|blockquote|pre|img)").expect("BLOCK_TAG is a valid regex pattern")
});

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Browsers ignore whitespace and control characters inside a URL scheme.
fn is_script_url(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    BLOCKED_SCHEMES
        .iter()
        .any(|scheme| compact.starts_with(scheme))
}

fn render_link(caps: &Captures) -> String {
    let (text, url) = (&caps[1], &caps[2]);
    if is_script_url(url) {
        text.to_string()
    } else {
        format!(r#"<a href="{}">{}</a>"#, url, text)
    }
}

/// Renders the markdown subset the blog writer produces into HTML.
pub fn render(markdown: &str) -> String {
    let escaped = escape_html(&markdown.replace("\r\n", "\n"));

    let html = H1.replace_all(&escaped, "<h1>${1}</h1>");
    let html = H2.replace_all(&html, "<h2>${1}</h2>");
    let html = H3.replace_all(&html, "<h3>${1}</h3>");
    let html = BOLD.replace_all(&html, "<strong>${1}</strong>");
    let html = ITALIC.replace_all(&html, "<em>${1}</em>");
    let html = LIST_ITEM.replace_all(&html, "<li>${1}</li>");
    let html = LINK.replace_all(&html, render_link);

    let paragraphs = html
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            if BLOCK_TAG.is_match(line) {
                line.to_string()
            } else {
                format!("<p>{}</p>", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    sanitize_currency(&paragraphs).into_owned()
}
