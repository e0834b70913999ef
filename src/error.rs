use thiserror::Error;

/// Configuration problems detected before a composition touches any storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("no word loader configured")]
    MissingLoader,

    #[error("no base source configured")]
    MissingBaseSource,

    #[error("unknown word source: {0}")]
    UnknownSource(String),

    #[error("unknown merge strategy: {0}")]
    UnknownMergeStrategy(String),

    #[error("unknown modifier: {0}")]
    UnknownModifier(String),
}

/// Reasons a reader could not produce words. These never leave the cache.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dictionary: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no reader for format {0:?}")]
    UnsupportedFormat(String),
}
