use std::sync::LazyLock;

use regex::Regex;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse whitespace runs to single spaces, trim, lowercase.
/// Idempotent; empty input stays empty.
pub fn normalize(text: &str) -> String {
    WS_RE.replace_all(text, " ").trim().to_lowercase()
}

/// True when any keyword occurs as a substring of the normalized text.
pub fn has_any(text: &str, keywords: &[&str]) -> bool {
    let t = normalize(text);
    contains_any(&t, keywords)
}

/// Substring scan over already-normalized text.
pub fn contains_any(normalized: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| normalized.contains(k))
}

// ── Tests ──
