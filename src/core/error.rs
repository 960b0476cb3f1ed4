use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    /// The part before `=` is not `deposit`, `withdraw` or `loan`.
    #[error("unknown operation: {0}")]
    UnknownKind(String),
    /// No `=amount` part was given.
    #[error("missing amount in operation: {0}")]
    MissingAmount(String),
    #[error("invalid amount {input:?}: {source}")]
    InvalidAmount {
        input: String,
        source: ParseFloatError
    }
}

pub type OperationResult<T> = Result<T, OperationError>;
