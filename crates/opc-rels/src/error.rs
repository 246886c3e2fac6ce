use thiserror::Error;

/// Errors produced while constructing or serializing relationships.
#[derive(Debug, Error)]
pub enum RelsError {
    #[error("unrecognized relationship type: {0}")]
    InvalidType(String),
    #[error("invalid target mode: {0} (expected Internal or External)")]
    InvalidTargetMode(String),
    #[error("relationship target must be non-empty")]
    EmptyTarget,
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("utf-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
