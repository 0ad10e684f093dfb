use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Not JSON, or JSON of the wrong shape.
    #[error("Malformed save document: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Well-formed document that does not describe a valid league.
    #[error("Inconsistent save document: {0}")]
    Inconsistent(String),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl SaveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SaveError::FileNotFound { .. })
    }

    /// The file exists but cannot be turned into a league.
    pub fn is_malformed(&self) -> bool {
        matches!(self, SaveError::Malformed(_) | SaveError::Inconsistent(_))
    }
}
