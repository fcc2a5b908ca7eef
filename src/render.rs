use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::heading::{classify_line, LineKind};

/// Whole-line title-page labels such as "Justices:" or "Final Order".
static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Justices?|Subject\s*Matters?(?:\(s\))?|Final\s*Order|Decision)\s*:?\s*$")
        .unwrap()
});
static SUBJECT_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Subject\s*Matter").unwrap());
static COURT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:Supreme Court|Court of Appeal)\b").unwrap());

/// Position within the title page.
///
/// The page opens with a bold header block (case name, citation, court).
/// The court line, or a "Subject Matter" label, switches to body styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TitleState {
    ScanningHeader,
    InBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TitleLine {
    Label { opens_body: bool },
    Court,
    Text,
}

impl TitleLine {
    fn of(line: &str) -> Self {
        if LABEL_RE.is_match(line) {
            TitleLine::Label {
                opens_body: SUBJECT_LABEL_RE.is_match(line),
            }
        } else if COURT_RE.is_match(line) {
            TitleLine::Court
        } else {
            TitleLine::Text
        }
    }
}

impl TitleState {
    /// Render `line` in this state and return the next state.
    fn render(self, line: &str, kind: TitleLine, accent: &str, out: &mut String) -> Self {
        match (self, kind) {
            (state, TitleLine::Label { opens_body }) => {
                out.push_str("<div style=\"margin-top:20px;\"></div>");
                push_bold(out, "margin:14px 0 6px 0;", accent, line);
                if opens_body {
                    TitleState::InBody
                } else {
                    state
                }
            }
            (TitleState::ScanningHeader, TitleLine::Court) => {
                out.push_str("<div style=\"margin-top:20px;\"></div>");
                push_bold(out, "margin:0; font-size:16px;", accent, line);
                TitleState::InBody
            }
            (TitleState::ScanningHeader, TitleLine::Text) => {
                push_bold(out, "margin:0; font-size:16px;", accent, line);
                TitleState::ScanningHeader
            }
            (TitleState::InBody, TitleLine::Court | TitleLine::Text) => {
                out.push_str("<p style=\"margin:0 0 4px 0;\">");
                escape_into(line, out);
                out.push_str("</p>\n");
                TitleState::InBody
            }
        }
    }
}

/// Render the title page as a centred block.
///
/// Lines of one character or less are dropped. Returns an empty string for
/// an empty span.
pub fn render_title_page(raw: &str, accent: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let mut out = String::from("<div style=\"text-align:center;\">\n");
    let mut state = TitleState::ScanningHeader;
    for line in content_lines(raw, 1) {
        state = state.render(line, TitleLine::of(line), accent, &mut out);
    }
    out.push_str("</div>");
    out
}

/// Render ratio decidendi lines: subheadings bold, everything else plain, all
/// in the accent colour.
///
/// Lines of two characters or less are dropped. Returns an empty string when
/// nothing is left.
pub fn render_ratio(raw: &str, accent: &str) -> String {
    let mut out = String::new();
    for line in content_lines(raw, 2) {
        match classify_line(line) {
            LineKind::Heading => push_bold(&mut out, "margin:12px 0 6px 0;", accent, line),
            LineKind::Body => {
                out.push_str("<p style=\"margin:0 0 8px 0; color:");
                escape_attr_into(accent, &mut out);
                out.push_str(";\">");
                escape_into(line, &mut out);
                out.push_str("</p>\n");
            }
        }
    }
    out
}

/// Escape `&`, `<` and `>` for use in element content.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(s, &mut out);
    out
}

/// Escape for a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_attr_into(s, &mut out);
    out
}

fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            _ => escape_into(ch.encode_utf8(&mut [0; 4]), out),
        }
    }
}

/// Trimmed lines longer than `min_chars` characters.
fn content_lines(raw: &str, min_chars: usize) -> impl Iterator<Item = &str> {
    raw.lines()
        .map(str::trim)
        .filter(move |line| line.chars().count() > min_chars)
}

/// `<p style="{margin}"><span style="color:{accent}; font-weight:bold;">{text}</span></p>`
fn push_bold(out: &mut String, margin: &str, accent: &str, text: &str) {
    let _ = write!(out, "<p style=\"{margin}\"><span style=\"color:");
    escape_attr_into(accent, out);
    out.push_str("; font-weight:bold;\">");
    escape_into(text, out);
    out.push_str("</span></p>\n");
}
