use crate::enums::RuleKind;
use crate::pattern::{CompiledPattern, MatchFlags, PatternResult, compile};

use super::builtin;

/// A named full-match validation rule.
///
/// The pattern is compiled eagerly; a rule that exists always matches against
/// the expression it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: Box<str>,
    compiled: CompiledPattern,
}

impl Rule {
    pub fn new(name: impl Into<String>, pattern: &str, flags: MatchFlags) -> PatternResult<Self> {
        let compiled = compile(pattern, flags)?;

        Ok(Self {
            name: name.into().into_boxed_str(),
            compiled,
        })
    }

    pub(crate) fn from_kind(kind: RuleKind) -> Self {
        Self {
            name: kind.name().into(),
            compiled: builtin::compiled(kind).clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.compiled.raw()
    }

    pub fn flags(&self) -> MatchFlags {
        self.compiled.flags()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.compiled.is_full_match(text)
    }
}
