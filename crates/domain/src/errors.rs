use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid list type: {0}")]
    InvalidListType(String),

    #[error("Invalid request: {0}")]
    MalformedRequest(String),

    #[error("Missing file part: {0}")]
    MissingFilePart(String),

    #[error("List file not found: {0}")]
    ListFileNotFound(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Wraps an I/O failure together with the file it happened on.
    pub fn io(path: impl std::fmt::Display, err: impl std::fmt::Display) -> Self {
        Self::IoError(format!("{}: {}", path, err))
    }
}
