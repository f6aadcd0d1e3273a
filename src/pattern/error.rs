use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    EmptyPattern,
    #[error("pattern '{pattern}' is not valid regex syntax")]
    InvalidSyntax {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
