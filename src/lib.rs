//! Structure extraction for court judgment text.
//!
//! `caseparse` takes the plain text of a judgment and splits it into a title
//! page, a subject-matter list and the ratio decidendi. The title page and
//! ratio are rendered as inline-styled HTML fragments, with ratio subheadings
//! picked out by a fixed set of heuristics. Subject matters are cleaned into
//! a short list of tag names.
//!
//! # Quick start
//!
//! ```rust
//! use caseparse::{parse_case, sanitize_tags, Config};
//!
//! let text = "OKAFOR v. STATE\n\
//!             Supreme Court of Nigeria\n\
//!             Subject Matter(s): Criminal Law; Evidence Act\n\
//!             RATIO DECIDENDI\n\
//!             EVIDENCE - confessional statement\n\
//!             A voluntary confession may ground a conviction.\n\
//!             FULL JUDGMENT\n";
//! let config = Config::default();
//! let case = parse_case(text, &config).unwrap();
//! let tags = sanitize_tags(&case.subject_matters, &config);
//! assert_eq!(tags, ["Criminal Law", "Evidence Act"]);
//! ```
//!
//! Everything in the parsing core is pure and synchronous. The [`Pipeline`]
//! wires it to a document store and a publisher supplied by the caller.

/// Emit a `tracing` event when the `tracing` feature is on; no-op otherwise.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    };
}

mod error;
mod heading;
mod locate;
mod pipeline;
mod post;
mod render;
mod sections;
mod subject;
mod tags;

pub use error::{BoxError, ParseError, ProcessError};
pub use heading::{classify_line, is_heading, LineKind};
pub use locate::first_match_offset;
pub use pipeline::{
    BatchReport, DocumentRef, DocumentSource, Pipeline, Publisher, SkippedDocument,
};
pub use post::{
    build_post_body, categories_for, post_title, CategoryIds, PostDraft, PUBLISH_STATUS,
};
pub use render::{escape_attr, escape_html, render_ratio, render_title_page};
pub use sections::{extract_sections, RawSections};
pub use subject::parse_subject_matters;
pub use tags::sanitize_tags;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Rendering and tag limits.
///
/// Defaults reproduce the house style: dark-blue accents, tags of 5 to 100
/// characters, at most 5 tags per case.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    pub accent_color: String,
    pub min_tag_len: usize,
    pub max_tag_len: usize,
    pub max_tags: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accent_color: "#050298".to_string(),
            min_tag_len: 5,
            max_tag_len: 100,
            max_tags: 5,
        }
    }
}

impl Config {
    pub fn with_accent_color(mut self, color: impl Into<String>) -> Self {
        self.accent_color = color.into();
        self
    }
    pub fn with_min_tag_len(mut self, n: usize) -> Self {
        self.min_tag_len = n;
        self
    }
    pub fn with_max_tag_len(mut self, n: usize) -> Self {
        self.max_tag_len = n;
        self
    }
    pub fn with_max_tags(mut self, n: usize) -> Self {
        self.max_tags = n;
        self
    }
}

/// A parsed judgment.
///
/// Either markup field may be empty when its section was not found; callers
/// decide what placeholder to show. `subject_matters` are raw list items, not
/// yet passed through [`sanitize_tags`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CaseDocument {
    pub title_page_markup: String,
    pub ratio_markup: String,
    pub subject_matters: Vec<String>,
}

/// Parse judgment text into rendered sections and subject matters.
///
/// Fails with [`ParseError::EmptyInput`] for blank text and
/// [`ParseError::NoSections`] when no section label was recognised at all.
/// Never panics: an internal fault is reported as [`ParseError::Internal`].
pub fn parse_case(text: &str, config: &Config) -> Result<CaseDocument, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        log_event!(warn, "document text is empty");
        return Err(ParseError::EmptyInput);
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| build_case(text, config)))
        .unwrap_or_else(|payload| Err(ParseError::Internal(panic_message(payload.as_ref()))));

    if let Err(_err) = &result {
        log_event!(warn, error = %_err, "could not parse document");
    }
    result
}

fn build_case(text: &str, config: &Config) -> Result<CaseDocument, ParseError> {
    let sections = extract_sections(text);
    let subject_matters = parse_subject_matters(sections.subject);

    log_event!(
        debug,
        title_page_chars = sections.title_page.len(),
        title_page_closed = sections.title_page_closed,
        ratio_chars = sections.ratio.len(),
        subject_matters = subject_matters.len(),
        "extracted sections"
    );

    let found_nothing = !sections.has_bounded_title_page()
        && sections.ratio.is_empty()
        && subject_matters.is_empty();
    if found_nothing {
        return Err(ParseError::NoSections);
    }

    Ok(CaseDocument {
        title_page_markup: render_title_page(sections.title_page, &config.accent_color),
        ratio_markup: render_ratio(sections.ratio, &config.accent_color),
        subject_matters,
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
