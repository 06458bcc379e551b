use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown region code: {0}")]
    UnknownRegion(String),
    #[error("unknown macro-region code: {0}")]
    UnknownMacroRegion(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
