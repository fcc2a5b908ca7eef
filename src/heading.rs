use std::sync::LazyLock;

use regex::Regex;

/// `NEGLIGENCE - failure to disclose`: an upper-case lead-in, a spaced dash
/// (hyphen, en dash or em dash), then anything.
static CAPS_DASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z0-9\s()/.,&-]+?)\s[-\u{2013}\u{2014}]\s(.+)$").unwrap()
});

/// Legal topics that mark a ratio subheading.
static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:OFFENCE|DEFENCE|EVIDENCE|JURISDICTION|APPEAL|MEANING OF|SCOPE OF|PRINCIPLE OF|BURDEN OF PROOF|STANDARD OF PROOF|ADMISSIBILITY|NEGLIGENCE|HOMICIDE|CONTRACT|ESTOPPEL|PRACTICE AND PROCEDURE|INTERPRETATION OF|CONSTITUTIONAL LAW|ACTION|COURT|JUDGMENT|ORDER|DAMAGES|LIMITATION LAW)\b",
    )
    .unwrap()
});

/// Curly single quotes are left out: in exported judgments they are almost
/// always apostrophes.
const QUOTE_CHARS: &[char] = &['"', '\'', '\u{201C}', '\u{201D}'];

/// Minimum number of ASCII letters before case statistics mean anything.
const MIN_LETTERS: usize = 4;
const UPPERCASE_RATIO: f64 = 0.80;
const MAX_UPPERCASE_LINE_CHARS: usize = 250;
const MIN_CAPS_LEAD_CHARS: usize = 3;

/// Classification of one line of ratio decidendi text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Body,
}

/// Outcome of a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Heading,
    Body,
    Undecided,
}

type Rule = fn(&str) -> Verdict;

/// Evaluated in order; the first decisive rule wins. Reordering changes
/// results on lines that several rules have an opinion about.
const RULES: &[(&str, Rule)] = &[
    ("trailing_colon", trailing_colon),
    ("caps_before_dash", caps_before_dash),
    ("mostly_uppercase", mostly_uppercase),
    ("legal_keyword", legal_keyword),
];

/// Classify a line as a subheading or body text.
pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Body;
    }
    for (_name, rule) in RULES {
        match rule(line) {
            Verdict::Heading => {
                log_event!(trace, rule = _name, line, "heading");
                return LineKind::Heading;
            }
            Verdict::Body => return LineKind::Body,
            Verdict::Undecided => {}
        }
    }
    LineKind::Body
}

/// Shorthand for `classify_line(line) == LineKind::Heading`.
pub fn is_heading(line: &str) -> bool {
    classify_line(line) == LineKind::Heading
}

fn trailing_colon(line: &str) -> Verdict {
    if line.ends_with(':') {
        Verdict::Heading
    } else {
        Verdict::Undecided
    }
}

fn caps_before_dash(line: &str) -> Verdict {
    let Some(caps) = CAPS_DASH_RE.captures(line) else {
        return Verdict::Undecided;
    };
    let lead = caps[1].trim();
    if lead.chars().count() > MIN_CAPS_LEAD_CHARS && lead == lead.to_uppercase() {
        Verdict::Heading
    } else {
        Verdict::Undecided
    }
}

/// Too few letters is a final "body" answer, not a pass to the next rule.
fn mostly_uppercase(line: &str) -> Verdict {
    let letters = line.chars().filter(char::is_ascii_alphabetic).count();
    if letters < MIN_LETTERS {
        return Verdict::Body;
    }
    let uppers = line.chars().filter(char::is_ascii_uppercase).count();
    let ratio = uppers as f64 / letters as f64;
    if ratio > UPPERCASE_RATIO
        && line.chars().count() < MAX_UPPERCASE_LINE_CHARS
        && !line.contains(['"', '\'', '(', ')'])
    {
        Verdict::Heading
    } else {
        Verdict::Undecided
    }
}

/// Quoted passages mention these topics constantly, so any quote mark
/// disqualifies the line.
fn legal_keyword(line: &str) -> Verdict {
    if KEYWORD_RE.is_match(line) && !line.contains(QUOTE_CHARS) {
        Verdict::Heading
    } else {
        Verdict::Undecided
    }
}
