// Pipeline tests with in-memory document store and publisher

use std::cell::RefCell;
use std::collections::HashMap;

use caseparse::{
    BoxError, CategoryIds, Config, DocumentRef, DocumentSource, ParseError, Pipeline, PostDraft,
    ProcessError, Publisher, SkippedDocument,
};
use pretty_assertions::assert_eq;

const IDS: CategoryIds = CategoryIds {
    judgments: 23,
    supreme_court: 890,
    court_of_appeal: 20,
};

const JUDGMENT: &str = "\
OKAFOR v. STATE\r
Court of Appeal\r
Subject Matter(s): Criminal Law; Evidence (Confessions); Criminal Law.\r
RATIO DECIDENDI\r
EVIDENCE - Confessional statement\r
A voluntary confession may ground a conviction.\r
FULL JUDGMENT\r
...";

#[derive(Default)]
struct MemorySource {
    texts: HashMap<String, String>,
}

impl MemorySource {
    fn with(mut self, id: &str, text: &str) -> Self {
        self.texts.insert(id.to_string(), text.to_string());
        self
    }
}

impl DocumentSource for MemorySource {
    fn fetch_text(&self, doc: &DocumentRef) -> Result<String, BoxError> {
        self.texts
            .get(&doc.id)
            .cloned()
            .ok_or_else(|| format!("no such document: {}", doc.id).into())
    }
}

#[derive(Default)]
struct MemoryPublisher {
    posts: RefCell<Vec<PostDraft>>,
    reject: bool,
}

impl Publisher for &MemoryPublisher {
    fn publish(&self, post: &PostDraft) -> Result<(), BoxError> {
        if self.reject {
            return Err("HTTP 500".into());
        }
        self.posts.borrow_mut().push(post.clone());
        Ok(())
    }
}

fn doc(id: &str, name: &str) -> DocumentRef {
    DocumentRef {
        id: id.to_string(),
        name: name.to_string(),
        preview_url: format!("https://files.example/{id}/preview"),
    }
}

#[test]
fn test_process_document_builds_and_publishes_post() {
    let source = MemorySource::default().with("a", JUDGMENT);
    let publisher = MemoryPublisher::default();
    let pipeline = Pipeline::new(source, &publisher, IDS, Config::default());

    let post = pipeline
        .process_document(&doc("a", "Okafor v State-CA-2021.pdf"))
        .unwrap();

    assert_eq!(post.title, "Okafor v State-CA-2021");
    assert_eq!(post.status, "publish");
    assert_eq!(post.categories, vec![23, 20]);
    assert_eq!(post.tags, vec!["Criminal Law", "Evidence Confessions"]);
    assert!(post.content.contains(">RATIO DECIDENDI</h3>"));
    assert!(post.content.contains("https://files.example/a/preview"));
    assert!(!post.content.contains('\r'));
    assert_eq!(*publisher.posts.borrow(), vec![post]);
}

#[test]
fn test_source_failure() {
    let publisher = MemoryPublisher::default();
    let pipeline = Pipeline::new(MemorySource::default(), &publisher, IDS, Config::default());
    let err = pipeline.process_document(&doc("missing", "x.pdf")).unwrap_err();
    assert!(matches!(err, ProcessError::Source(_)));
    assert!(publisher.posts.borrow().is_empty());
}

#[test]
fn test_parse_failure_is_not_published() {
    let source = MemorySource::default().with("blank", "  \r\n ");
    let publisher = MemoryPublisher::default();
    let pipeline = Pipeline::new(source, &publisher, IDS, Config::default());
    let err = pipeline.process_document(&doc("blank", "blank.pdf")).unwrap_err();
    assert!(matches!(err, ProcessError::Parse(ParseError::EmptyInput)));
    assert!(publisher.posts.borrow().is_empty());
}

#[test]
fn test_publish_failure() {
    let source = MemorySource::default().with("a", JUDGMENT);
    let publisher = MemoryPublisher {
        reject: true,
        ..MemoryPublisher::default()
    };
    let pipeline = Pipeline::new(source, &publisher, IDS, Config::default());
    let err = pipeline.process_document(&doc("a", "a.pdf")).unwrap_err();
    assert!(matches!(err, ProcessError::Publish(_)));
}

#[test]
fn test_process_all_skips_failures_and_continues() {
    let source = MemorySource::default()
        .with("a", JUDGMENT)
        .with("prose", "Nothing in this file looks like a judgment.")
        .with("b", JUDGMENT);
    let publisher = MemoryPublisher::default();
    let pipeline = Pipeline::new(source, &publisher, IDS, Config::default());

    let docs = [
        doc("a", "First-SC-2020.pdf"),
        doc("prose", "Notes.docx"),
        doc("gone", "Gone.pdf"),
        doc("b", "Second-CA-2021.doc"),
    ];
    let report = pipeline.process_all(&docs);

    assert_eq!(report.published, vec!["First-SC-2020", "Second-CA-2021"]);
    assert_eq!(
        report.skipped,
        vec![
            SkippedDocument {
                name: "Notes.docx".to_string(),
                reason: "no title page, subject matter or ratio decidendi section found"
                    .to_string(),
            },
            SkippedDocument {
                name: "Gone.pdf".to_string(),
                reason: "could not read document text: no such document: gone".to_string(),
            },
        ]
    );
    assert_eq!(publisher.posts.borrow().len(), 2);
}

#[test]
fn test_prepare_without_publishing() {
    let publisher = MemoryPublisher::default();
    let pipeline = Pipeline::new(MemorySource::default(), &publisher, IDS, Config::default());
    let post = pipeline
        .prepare(&doc("a", "Okafor-SC-2020.pdf"), JUDGMENT)
        .unwrap();
    assert_eq!(post.categories, vec![23, 890]);
    assert!(publisher.posts.borrow().is_empty());
}
