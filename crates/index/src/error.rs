use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    /// The index cannot be built from what it was given
    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, IndexError>;
