use thiserror::Error;

pub type Result<T> = std::result::Result<T, FaqStoreError>;

#[derive(Debug, Error)]
pub enum FaqStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("FAQ parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
