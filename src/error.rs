use thiserror::Error;

/// Failures when touching the live document. None of these are shown to the
/// visitor; callers log them and render without the side effect.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("document has no root element")]
    NoDocumentElement,
    #[error("could not update style `{property}`: {reason}")]
    Style { property: String, reason: String },
}
