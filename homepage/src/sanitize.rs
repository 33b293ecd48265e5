//! Boundary for markup supplied by the content source.
//!
//! The footer description, disclaimer and copyright arrive as HTML. They are
//! never injected as-is unless the site is configured to trust the source;
//! the default is an allow-list sanitiser that keeps simple inline formatting
//! and safe links and drops everything else.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::RawHtml;

/// How [`RawHtml`] reaches the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RawHtmlPolicy {
    /// Allow-list sanitiser (see [`sanitize_html`]).
    #[default]
    Sanitize,
    /// Inject verbatim. The content source guarantees clean markup.
    Trusted,
    /// Render the markup as literal text.
    Escape,
}

/// Raw markup after the policy was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RichContent {
    /// Safe to inject as inner HTML
    Markup(String),
    /// Must be rendered as an escaped text node
    Text(String),
}

impl RawHtmlPolicy {
    pub fn prepare(self, html: &RawHtml) -> RichContent {
        match self {
            RawHtmlPolicy::Sanitize => RichContent::Markup(sanitize_html(html.as_str())),
            RawHtmlPolicy::Trusted => RichContent::Markup(html.as_str().to_string()),
            RawHtmlPolicy::Escape => RichContent::Text(html.as_str().to_string()),
        }
    }

    /// Link target from the content source, or `None` when it must not
    /// become an `href`.
    ///
    /// Only `Trusted` passes unsafe schemes through; the other policies keep
    /// relative links and [`LINK_SCHEMES`].
    pub fn href(self, url: &str) -> Option<String> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        if self != RawHtmlPolicy::Trusted && !is_safe_href(url) {
            debug!(url, "dropped unsafe link target");
            return None;
        }
        Some(url.to_string())
    }
}

static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<(/?)([A-Za-z][A-Za-z0-9]*)([^<>]*)>").unwrap()
});

static ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
        .unwrap()
});

const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "br", "em", "i", "li", "ol", "p", "span", "strong", "u", "ul",
];

const VOID_TAGS: &[&str] = &["br"];

/// Elements removed together with everything inside them.
const DROPPED_WITH_CONTENT: &[&str] = &[
    "iframe", "math", "noscript", "object", "script", "style", "svg", "template", "textarea",
    "title",
];

const LINK_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Keep allow-listed tags, drop the rest, and balance what is kept.
///
/// Attributes are stripped except `href` (safe schemes or relative) and
/// `target="_blank"` on links, which also gets `rel="noopener noreferrer"`.
/// Text outside tags has `<` and `>` escaped.
///
/// ```rust
/// use homepage_leptos::sanitize::sanitize_html;
///
/// assert_eq!(
///     sanitize_html(r#"<p onclick="x()">Hi <script>alert(1)</script><b>there</p>"#),
///     "<p>Hi <b>there</b></p>"
/// );
/// ```
pub fn sanitize_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut open: Vec<&'static str> = Vec::new();
    let mut dropped = 0usize;
    let mut pos = 0;

    while let Some(caps) = TAG.captures_at(input, pos) {
        let Some(whole) = caps.get(0) else { break };
        push_text(&mut out, &input[pos..whole.start()]);
        pos = whole.end();

        // comment
        let Some(name) = caps.get(2) else { continue };
        let name = name.as_str().to_ascii_lowercase();
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());

        if !closing && DROPPED_WITH_CONTENT.contains(&name.as_str()) {
            pos = skip_element(input, pos, &name);
            dropped += 1;
            continue;
        }

        let Some(tag) = ALLOWED_TAGS.iter().copied().find(|t| *t == name) else {
            dropped += 1;
            continue;
        };

        if closing {
            if let Some(depth) = open.iter().rposition(|t| *t == tag) {
                for t in open.drain(depth..).rev() {
                    push_close(&mut out, t);
                }
            }
            continue;
        }

        out.push('<');
        out.push_str(tag);
        if tag == "a" {
            push_link_attrs(&mut out, caps.get(3).map_or("", |m| m.as_str()));
        }
        out.push('>');
        if !VOID_TAGS.contains(&tag) {
            open.push(tag);
        }
    }

    push_text(&mut out, &input[pos..]);
    for t in open.into_iter().rev() {
        push_close(&mut out, t);
    }

    if dropped > 0 {
        debug!(dropped, "sanitizer removed disallowed markup");
    }
    out
}

/// Position just past the closing tag of `name`, or the end of input.
fn skip_element(input: &str, from: usize, name: &str) -> usize {
    let rest = input[from..].to_ascii_lowercase();
    let Some(close) = rest.find(&format!("</{}", name)) else {
        return input.len();
    };
    match rest[close..].find('>') {
        Some(gt) => from + close + gt + 1,
        None => input.len(),
    }
}

fn push_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn push_close(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_link_attrs(out: &mut String, attrs: &str) {
    let mut blank_target = false;
    for caps in ATTR.captures_iter(attrs) {
        let name = caps[1].to_ascii_lowercase();
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or("", |m| m.as_str());

        match name.as_str() {
            "href" if is_safe_href(value) => {
                out.push_str(" href=\"");
                out.push_str(&value.trim().replace('"', "&quot;"));
                out.push('"');
            }
            "target" if value == "_blank" => blank_target = true,
            _ => {}
        }
    }
    if blank_target {
        out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
    }
}

/// Relative links and the schemes in [`LINK_SCHEMES`].
fn is_safe_href(value: &str) -> bool {
    let value = value.trim();
    let head_end = value.find(['/', '?', '#']).unwrap_or(value.len());
    let head = &value[..head_end];

    // entity-encoded schemes are decoded by the browser
    if head.contains('&') {
        return false;
    }
    match head.find(':') {
        Some(colon) => LINK_SCHEMES.contains(&head[..colon].to_ascii_lowercase().as_str()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_simple_formatting() {
        let html = "<p>RERA No. <strong>P51800012345</strong><br/>Updated <em>2025</em></p>";
        assert_eq!(
            sanitize_html(html),
            "<p>RERA No. <strong>P51800012345</strong><br>Updated <em>2025</em></p>"
        );
    }

    #[test]
    fn drops_scripts_with_their_content() {
        assert_eq!(
            sanitize_html("Hello<SCRIPT type=\"x\">alert('x')</script> world"),
            "Hello world"
        );
        assert_eq!(sanitize_html("a<style>p{}</style>b<iframe src=x></iframe>c"), "abc");
        assert_eq!(sanitize_html("unterminated <script>alert(1)"), "unterminated ");
    }

    #[test]
    fn strips_event_handlers_and_unknown_tags() {
        let html = concat!(
            r#"<div class="x"><span onmouseover="steal()">hi</span>"#,
            r#"<img src=x onerror=alert(1)></div>"#,
        );
        assert_eq!(sanitize_html(html), "<span>hi</span>");
    }

    #[test]
    fn links_keep_safe_href_and_target() {
        let html = r#"<a href="https://mumbaihomes.in/terms" target="_blank" style="x">Terms</a>"#;
        assert_eq!(
            sanitize_html(html),
            concat!(
                r#"<a href="https://mumbaihomes.in/terms" target="_blank" "#,
                r#"rel="noopener noreferrer">Terms</a>"#,
            )
        );
        assert_eq!(
            sanitize_html("<a href='/privacy'>Privacy</a>"),
            r#"<a href="/privacy">Privacy</a>"#
        );
        assert_eq!(
            sanitize_html("<a href=mailto:care@mumbaihomes.in>Mail</a>"),
            r#"<a href="mailto:care@mumbaihomes.in">Mail</a>"#
        );
    }

    #[test]
    fn links_drop_dangerous_href() {
        for href in [
            "javascript:alert(1)",
            " JavaScript:alert(1)",
            "data:text/html;base64,AAAA",
            "&#106;avascript:alert(1)",
            "javascript&#58;alert(1)",
            "java\tscript:alert(1)",
        ] {
            let html = format!("<a href=\"{}\">x</a>", href);
            assert_eq!(sanitize_html(&html), "<a>x</a>", "href {:?}", href);
        }
    }

    #[test]
    fn content_hrefs_follow_policy() {
        let sanitize = RawHtmlPolicy::Sanitize;
        assert_eq!(sanitize.href(" /about "), Some("/about".to_string()));
        assert_eq!(
            sanitize.href("https://wa.me/919800000000"),
            Some("https://wa.me/919800000000".to_string())
        );
        assert_eq!(sanitize.href("javascript:alert(1)"), None);
        assert_eq!(sanitize.href("data:text/html;base64,AAAA"), None);
        assert_eq!(sanitize.href(""), None);
        assert_eq!(RawHtmlPolicy::Escape.href("javascript:alert(1)"), None);
        assert_eq!(
            RawHtmlPolicy::Trusted.href("javascript:openChat()"),
            Some("javascript:openChat()".to_string())
        );
    }

    #[test]
    fn balances_and_escapes() {
        assert_eq!(sanitize_html("<p><b>bold"), "<p><b>bold</b></p>");
        assert_eq!(sanitize_html("</ul>stray</p>"), "stray");
        assert_eq!(
            sanitize_html("<ul><li>one<li>two</ul>"),
            "<ul><li>one<li>two</li></li></ul>"
        );
        assert_eq!(sanitize_html("1 < 2 && 3 > 2"), "1 &lt; 2 && 3 &gt; 2");
        assert_eq!(sanitize_html("a<!-- <script>x</script> -->b"), "ab");
    }

    #[test]
    fn policies() {
        let html = RawHtml::from("<p onclick=\"x\">&copy; 2025</p>");
        assert_eq!(
            RawHtmlPolicy::Sanitize.prepare(&html),
            RichContent::Markup("<p>&copy; 2025</p>".into())
        );
        assert_eq!(
            RawHtmlPolicy::Trusted.prepare(&html),
            RichContent::Markup("<p onclick=\"x\">&copy; 2025</p>".into())
        );
        assert_eq!(
            RawHtmlPolicy::Escape.prepare(&html),
            RichContent::Text("<p onclick=\"x\">&copy; 2025</p>".into())
        );
    }
}
