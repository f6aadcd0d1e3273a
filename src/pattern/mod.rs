mod compiler;
mod error;
mod flags;
mod matcher;

pub use compiler::{CompiledPattern, compile};
pub use error::{PatternError, PatternResult};
pub use flags::MatchFlags;
