//! Escaping and sanitizing helpers for generated markup.

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Abstracts arrive as HTML from the upstream pipeline; keep formatting tags,
/// drop scripts and event handlers. TeX delimiters pass through untouched.
pub fn sanitize_abstract(raw: &str) -> String {
    ammonia::clean(raw)
}
