use thiserror::Error;

use crate::pattern::PatternError;

#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("a rule named '{name}' is already registered")]
    DuplicateRule { name: String },
    #[error("no rule named '{name}' is registered")]
    UnknownRule { name: String },
    #[error("rule configuration is not valid JSON")]
    Config {
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type RuleSetResult<T> = Result<T, RuleSetError>;
