use thiserror::Error;

use crate::pattern::PatternError;
use crate::rules::RuleSetError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    RuleSet(#[from] RuleSetError),
}

pub type Result<T> = std::result::Result<T, Error>;
