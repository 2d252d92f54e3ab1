use num_bigint::BigUint;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TankobonError {
    #[error("Invalid number: {0}")]
    Parse(String),

    #[error("Out of roman range [1, 4999]: {0}")]
    Range(BigUint),

    #[error("Cannot choose a number for '{0}' (use --hoax to discard candidates)")]
    CannotChoose(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl TankobonError {
    /// Errors caused by a directory name that cannot be read as a number.
    ///
    /// A volume whose chapters fail this way is dropped instead of aborting the run.
    pub fn is_name_error(&self) -> bool {
        matches!(self, TankobonError::Parse(_) | TankobonError::Range(_))
    }
}

pub type Result<T> = std::result::Result<T, TankobonError>;
