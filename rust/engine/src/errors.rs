use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("requested {requested} cards but only {available} remain")]
    InsufficientCards { requested: usize, available: usize },
    #[error("unknown spread '{name}'")]
    UnknownSpread { name: String },
    #[error("unknown selection strategy '{name}'")]
    UnknownStrategy { name: String },
    #[error("invalid spread definition: {0}")]
    InvalidSpread(String),
}
