use regex::{Regex, RegexBuilder};

use super::error::{PatternError, PatternResult};
use super::flags::MatchFlags;
use super::matcher;

/// A pattern compiled for anchored full-string matching.
///
/// The source expression is wrapped as `^(?:…)$` at compile time, so a match
/// must consume the entire input; there is no way to perform a substring
/// search through this type.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    raw: Box<str>,
    flags: MatchFlags,
    regex: Regex,
}

impl CompiledPattern {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn flags(&self) -> MatchFlags {
        self.flags
    }

    pub fn is_full_match(&self, text: &str) -> bool {
        matcher::full_match(&self.regex, text)
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.flags == other.flags
    }
}

impl Eq for CompiledPattern {}

#[tracing::instrument(level = "trace", fields(pattern=%pattern, flags=?flags))]
pub fn compile(pattern: &str, flags: MatchFlags) -> PatternResult<CompiledPattern> {
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    // anchor both ends so a match must consume the whole input
    let anchored = format!("^(?:{pattern})$");

    let regex = RegexBuilder::new(&anchored)
        .case_insensitive(flags.contains(MatchFlags::CASE_INSENSITIVE))
        .dot_matches_new_line(flags.contains(MatchFlags::DOT_ALL))
        .build()
        .map_err(|source| PatternError::InvalidSyntax {
            pattern: pattern.to_string(),
            source,
        })?;

    Ok(CompiledPattern {
        raw: pattern.into(),
        flags,
        regex,
    })
}
