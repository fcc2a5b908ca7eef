use thiserror::Error;

/// Boxed error returned by external collaborators (document stores, publishers).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Reasons [`parse_case`](crate::parse_case) produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("document text is empty")]
    EmptyInput,
    #[error("no title page, subject matter or ratio decidendi section found")]
    NoSections,
    #[error("internal fault while parsing: {0}")]
    Internal(String),
}

/// Failure to take one document from source to published post.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("could not read document text")]
    Source(#[source] BoxError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("publishing failed")]
    Publish(#[source] BoxError),
}
