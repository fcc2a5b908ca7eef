use std::sync::LazyLock;

use regex::Regex;

use crate::locate::first_match_offset;

/// Line-anchored section labels; compiled once and shared by every parse.
static CASE_SYNOPSIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*CASE\s+SYNOPSIS\b").unwrap());
static INTRODUCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*INTRODUCTION\b").unwrap());
static ISSUES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mi)^\s*ISSUES?\b").unwrap());
static RATIO_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*RATIO\s+DECIDENDI\b").unwrap());
static FINAL_ORDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*Final\s*Order\b").unwrap());

/// "Subject Matter", "Subject Matters", "Subject Matter(s):" at the start of
/// a line, and the whitespace/colons that follow.
static SUBJECT_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^\s*Subject\s*Matters?(?:\(s\))?[\s:]*").unwrap()
});
static RATIO_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*(?:FULL|MAIN)\s+JUDGMENTS?\b").unwrap());

/// The three raw spans carved out of a judgment, each trimmed.
///
/// A span is empty when its boundary labels are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawSections<'a> {
    pub title_page: &'a str,
    /// Whether a section label ended the title page. When `false` the title
    /// page is the whole document.
    pub title_page_closed: bool,
    pub subject: &'a str,
    pub ratio: &'a str,
}

impl RawSections<'_> {
    /// A title page that some section label actually closed.
    pub fn has_bounded_title_page(&self) -> bool {
        self.title_page_closed && !self.title_page.is_empty()
    }
}

/// Labels that close the title page.
fn title_end_patterns() -> [&'static Regex; 4] {
    [&CASE_SYNOPSIS_RE, &INTRODUCTION_RE, &ISSUES_RE, &RATIO_LINE_RE]
}

/// Labels that close the subject-matter list: the title-page labels plus
/// "Final Order", which usually follows the list on the title page itself.
fn subject_end_patterns() -> [&'static Regex; 5] {
    [
        &FINAL_ORDER_RE,
        &CASE_SYNOPSIS_RE,
        &INTRODUCTION_RE,
        &ISSUES_RE,
        &RATIO_LINE_RE,
    ]
}

/// Split judgment text into title page, subject-matter block and ratio block.
pub fn extract_sections(text: &str) -> RawSections<'_> {
    let (title_page, title_page_closed) = extract_title_page(text);
    RawSections {
        title_page,
        title_page_closed,
        subject: extract_subject(text),
        ratio: extract_between(text, &RATIO_LINE_RE, &RATIO_END_RE),
    }
}

/// Everything before the first section label, or the whole text if none.
fn extract_title_page(text: &str) -> (&str, bool) {
    match first_match_offset(text, &title_end_patterns()) {
        Some(end) => (text[..end].trim(), true),
        None => (text.trim(), false),
    }
}

fn extract_subject(text: &str) -> &str {
    let Some(label) = SUBJECT_LABEL_RE.find(text) else {
        return "";
    };
    let rest = &text[label.end()..];
    let end = first_match_offset(rest, &subject_end_patterns()).unwrap_or(rest.len());
    rest[..end].trim()
}

/// Text strictly between `start` and the next `end` after it. Empty if
/// either label is missing.
fn extract_between<'a>(text: &'a str, start: &Regex, end: &Regex) -> &'a str {
    let Some(start_match) = start.find(text) else {
        return "";
    };
    let rest = &text[start_match.end()..];
    match end.find(rest) {
        Some(end_match) => rest[..end_match.start()].trim(),
        None => "",
    }
}
