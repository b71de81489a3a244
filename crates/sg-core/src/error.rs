use thiserror::Error;

pub type SgResult<T> = Result<T, SgError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SgError {
    #[error("Non-finite coordinate for {what}: {value}")]
    NonFinite { what: String, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
