use serde::{Deserialize, Serialize};

use crate::pattern::MatchFlags;

/// A rule declared in configuration. Both flags default to on, matching the
/// built-in rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub pattern: String,
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
    #[serde(default = "default_true")]
    pub dot_all: bool,
}

impl RuleConfig {
    pub fn flags(&self) -> MatchFlags {
        let mut flags = MatchFlags::empty();

        if self.case_insensitive {
            flags |= MatchFlags::CASE_INSENSITIVE;
        }
        if self.dot_all {
            flags |= MatchFlags::DOT_ALL;
        }

        flags
    }
}

fn default_true() -> bool {
    true
}
