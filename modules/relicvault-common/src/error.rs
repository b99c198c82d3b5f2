use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelicVaultError {
    #[error("Artifact source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Generated content failed to parse: {0}")]
    SchemaMismatch(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
