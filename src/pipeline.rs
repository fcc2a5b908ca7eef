use crate::error::{BoxError, ParseError, ProcessError};
use crate::post::{
    build_post_body, categories_for, post_title, CategoryIds, PostDraft, PUBLISH_STATUS,
};
use crate::{parse_case, sanitize_tags, Config};

/// A judgment held by a document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Store-specific identifier passed back to [`DocumentSource::fetch_text`].
    pub id: String,
    /// File name; drives the post title and categories.
    pub name: String,
    /// Embeddable preview of the original file.
    pub preview_url: String,
}

/// Where judgment text comes from.
pub trait DocumentSource {
    fn fetch_text(&self, doc: &DocumentRef) -> Result<String, BoxError>;
}

/// Where finished posts go.
pub trait Publisher {
    fn publish(&self, post: &PostDraft) -> Result<(), BoxError>;
}

/// A document that did not make it to publication.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SkippedDocument {
    pub name: String,
    pub reason: String,
}

/// Outcome of [`Pipeline::process_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchReport {
    /// Titles of published posts, in processing order.
    pub published: Vec<String>,
    pub skipped: Vec<SkippedDocument>,
}

/// Fetch, parse and publish judgments one document at a time.
pub struct Pipeline<S, P> {
    source: S,
    publisher: P,
    categories: CategoryIds,
    config: Config,
}

impl<S: DocumentSource, P: Publisher> Pipeline<S, P> {
    pub fn new(source: S, publisher: P, categories: CategoryIds, config: Config) -> Self {
        Self {
            source,
            publisher,
            categories,
            config,
        }
    }

    /// Build the post for one document without publishing it.
    pub fn prepare(&self, doc: &DocumentRef, text: &str) -> Result<PostDraft, ParseError> {
        let text = text.replace('\r', "");
        let case = parse_case(&text, &self.config)?;
        let tags = sanitize_tags(&case.subject_matters, &self.config);
        Ok(PostDraft {
            title: post_title(&doc.name),
            content: build_post_body(&case, &doc.preview_url, &self.config),
            status: PUBLISH_STATUS.to_string(),
            categories: categories_for(&doc.name, &self.categories),
            tags,
        })
    }

    /// Fetch, parse and publish one document.
    pub fn process_document(&self, doc: &DocumentRef) -> Result<PostDraft, ProcessError> {
        let text = self.source.fetch_text(doc).map_err(ProcessError::Source)?;
        let post = self.prepare(doc, &text)?;
        log_event!(
            debug,
            document = %doc.name,
            tags = ?post.tags,
            categories = ?post.categories,
            "prepared post"
        );
        self.publisher.publish(&post).map_err(ProcessError::Publish)?;
        Ok(post)
    }

    /// Process every document, skipping (and logging) the ones that fail.
    pub fn process_all<'a, I>(&self, docs: I) -> BatchReport
    where
        I: IntoIterator<Item = &'a DocumentRef>,
    {
        let mut report = BatchReport::default();
        for doc in docs {
            match self.process_document(doc) {
                Ok(post) => {
                    log_event!(info, document = %doc.name, title = %post.title, "published");
                    report.published.push(post.title);
                }
                Err(err) => {
                    log_event!(warn, document = %doc.name, error = %err, "skipped document");
                    report.skipped.push(SkippedDocument {
                        name: doc.name.clone(),
                        reason: error_chain(&err),
                    });
                }
            }
        }
        log_event!(
            info,
            published = report.published.len(),
            skipped = report.skipped.len(),
            "finished processing documents"
        );
        report
    }
}

/// `err` followed by its sources, joined with ": ".
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
