use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::Config;

static LEADING_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*[).:\-]\s*").unwrap());
static TRAILING_PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.,;:]+$").unwrap());
static MULTI_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());
static LEADING_DASH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-\s*").unwrap());

/// Turn subject-matter candidates into publishable tag names.
///
/// Each candidate loses its leading number, trailing punctuation and
/// parenthesis characters, and has internal whitespace collapsed. Results
/// outside `config.min_tag_len..=config.max_tag_len` characters are dropped,
/// as are case-insensitive duplicates. At most `config.max_tags` tags are
/// returned; later candidates are ignored.
pub fn sanitize_tags<S: AsRef<str>>(candidates: &[S], config: &Config) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for candidate in candidates {
        if tags.len() >= config.max_tags {
            break;
        }
        let tag = clean_tag(candidate.as_ref());
        let len = tag.chars().count();
        if len < config.min_tag_len || len > config.max_tag_len {
            continue;
        }
        if seen.insert(tag.to_lowercase()) {
            tags.push(tag);
        }
    }
    tags
}

fn clean_tag(raw: &str) -> String {
    let s = LEADING_NUMBER_RE.replace(raw, "");
    let s = TRAILING_PUNCT_RE.replace(&s, "");
    let s = s.replace(['(', ')'], "");
    let s = MULTI_SPACE_RE.replace_all(&s, " ");
    let s = LEADING_DASH_RE.replace(&s, "");
    s.trim().to_string()
}
