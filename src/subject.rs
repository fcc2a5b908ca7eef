use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Bullet characters that separate list items.
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{2022}\u{2023}\u{25E6}*]").unwrap());
static SEMICOLON_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*;\s*").unwrap());
/// "Tort, 2. Contract": a comma directly before a numbered item.
static COMMA_BEFORE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*(\d+\s*\.)").unwrap());
/// "12 ." / "12.  " → "12. "
static NUMBER_DOT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)\s*\.\s*").unwrap());
/// One or more list markers at the start of a line: "3) ", "1) 2) ".
static LEADING_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:\s*\d+\s*[).:\-]\s*)+").unwrap());
static LINE_BREAKS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Items this short are stray fragments, not subject matters.
const MIN_ITEM_CHARS: usize = 5;

/// Split a raw subject-matter block into distinct list items.
///
/// Semicolons, bullets and numbered-list markers all separate items. Items of
/// five characters or fewer are dropped. Duplicates are detected
/// case-insensitively; the first spelling seen is kept, in order of first
/// appearance.
pub fn parse_subject_matters(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let s = raw.replace('\r', " ");
    let s = BULLET_RE.replace_all(&s, "\n");
    let s = SEMICOLON_RE.replace_all(&s, "\n");
    let s = COMMA_BEFORE_NUMBER_RE.replace_all(&s, "\n$1");
    let s = break_before_numbered_items(&s);
    let s = NUMBER_DOT_RE.replace_all(&s, "$1. ");
    let s = LEADING_MARKER_RE.replace_all(&s, "");

    let mut seen = HashSet::new();
    LINE_BREAKS_RE
        .split(&s)
        .map(str::trim)
        .filter(|item| item.chars().count() > MIN_ITEM_CHARS)
        .filter(|item| seen.insert(item.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Replace a whitespace run with a line break when it sits between a
/// non-space character and a numbered item ("Tort 2. Contract").
fn break_before_numbered_items(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    let mut prev_is_text = false;

    while let Some(ch) = rest.chars().next() {
        if !ch.is_whitespace() {
            out.push(ch);
            prev_is_text = true;
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        let run_len = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        let (run, after) = rest.split_at(run_len);
        if prev_is_text && starts_numbered_item(after) {
            out.push('\n');
        } else {
            out.push_str(run);
        }
        prev_is_text = false;
        rest = after;
    }
    out
}

/// `true` if `s` starts with digits, optional spaces, then a dot.
fn starts_numbered_item(s: &str) -> bool {
    let digits = s.len() - s.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    digits > 0 && s[digits..].trim_start().starts_with('.')
}
