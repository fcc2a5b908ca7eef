use std::sync::LazyLock;

use regex::Regex;

use crate::render::escape_attr;
use crate::{CaseDocument, Config};

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(?:docx?|pdf)$").unwrap());

/// Status given to every post built here.
pub const PUBLISH_STATUS: &str = "publish";

const MISSING_TITLE_PAGE: &str = "<p><i>[Title page section could not be extracted.]</i></p>";
const MISSING_RATIO: &str = "<p><i>[Ratio Decidendi section could not be extracted.]</i></p>";

/// Category identifiers in the publishing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryIds {
    /// Applied to every judgment.
    pub judgments: u64,
    pub supreme_court: u64,
    pub court_of_appeal: u64,
}

/// A post ready to hand to a [`Publisher`](crate::Publisher).
///
/// `tags` are names; resolving them to backend identifiers is the
/// publisher's job.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub status: String,
    pub categories: Vec<u64>,
    pub tags: Vec<String>,
}

/// Post title from a file name: the name without a `.doc`, `.docx` or
/// `.pdf` extension.
pub fn post_title(file_name: &str) -> String {
    EXTENSION_RE.replace(file_name, "").trim().to_string()
}

/// Categories implied by a file name.
///
/// File names carry the court as `-SC-` (Supreme Court) or `-CA-` (Court of
/// Appeal).
pub fn categories_for(file_name: &str, ids: &CategoryIds) -> Vec<u64> {
    let upper = file_name.to_uppercase();
    let mut categories = vec![ids.judgments];
    if upper.contains("-SC-") {
        categories.push(ids.supreme_court);
    }
    if upper.contains("-CA-") {
        categories.push(ids.court_of_appeal);
    }
    categories
}

/// Assemble the post body: title page, a "RATIO DECIDENDI" heading, the
/// ratio, and an embedded preview of the full judgment.
///
/// Missing sections get an italic placeholder.
pub fn build_post_body(case: &CaseDocument, preview_url: &str, config: &Config) -> String {
    let accent = escape_attr(&config.accent_color);
    let title_page = non_empty_or(&case.title_page_markup, MISSING_TITLE_PAGE);
    let ratio = non_empty_or(&case.ratio_markup, MISSING_RATIO);
    let preview_url = escape_attr(preview_url);

    format!(
        r#"{title_page}
<h3 style="color:{accent}; font-weight:bold; margin-top: 30px; text-align:left;">RATIO DECIDENDI</h3>
{ratio}
<div style="width:100%; max-width:100%; height:1200px; overflow:hidden; margin-top: 30px; border: 1px solid #ccc; position: relative;">
  <p style="text-align:center; font-weight:bold; color:{accent}; margin-bottom: 10px;">FULL JUDGMENT VIEW</p>
  <iframe src="{preview_url}" width="100%" height="100%" frameborder="0" scrolling="yes" style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; border: none;" allow="fullscreen"></iframe>
</div>
"#
    )
}

fn non_empty_or<'a>(markup: &'a str, placeholder: &'a str) -> &'a str {
    if markup.trim().is_empty() {
        placeholder
    } else {
        markup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const IDS: CategoryIds = CategoryIds {
        judgments: 23,
        supreme_court: 890,
        court_of_appeal: 20,
    };

    #[test]
    fn test_post_title_strips_extension() {
        assert_eq!(post_title("Okafor v State-SC-2020.pdf"), "Okafor v State-SC-2020");
        assert_eq!(post_title("Brief.DOCX "), "Brief.DOCX");
        assert_eq!(post_title(" Notes.Doc"), "Notes");
        assert_eq!(post_title("Judgment.txt"), "Judgment.txt");
    }

    #[test]
    fn test_categories() {
        assert_eq!(categories_for("Okafor-SC-2020.pdf", &IDS), vec![23, 890]);
        assert_eq!(categories_for("ojo-ca-2019.docx", &IDS), vec![23, 20]);
        assert_eq!(categories_for("High Court ruling.pdf", &IDS), vec![23]);
    }

    #[test]
    fn test_body_uses_placeholders() {
        let body = build_post_body(
            &CaseDocument::default(),
            "https://x/preview",
            &Config::default(),
        );
        assert!(body.contains(MISSING_TITLE_PAGE));
        assert!(body.contains(MISSING_RATIO));
        assert!(body.contains(">RATIO DECIDENDI</h3>"));
    }

    #[test]
    fn test_body_keeps_sections_in_order() {
        let case = CaseDocument {
            title_page_markup: "<div>TITLE</div>".to_string(),
            ratio_markup: "<p>RATIO</p>\n".to_string(),
            subject_matters: vec![],
        };
        let body = build_post_body(&case, "https://x/preview", &Config::default());
        let title = body.find("TITLE").unwrap();
        let heading = body.find("RATIO DECIDENDI").unwrap();
        let ratio = body.find("<p>RATIO</p>").unwrap();
        let frame = body.find("<iframe").unwrap();
        assert!(title < heading && heading < ratio && ratio < frame);
        assert!(!body.contains("could not be extracted"));
    }

    #[test]
    fn test_preview_url_is_escaped() {
        let body = build_post_body(
            &CaseDocument::default(),
            "https://x/?a=1&b=\"2\"",
            &Config::default(),
        );
        assert!(body.contains("src=\"https://x/?a=1&amp;b=&quot;2&quot;\""));
    }
}
