use hashbrown::HashMap;

use crate::enums::RuleKind;
use crate::types::RuleName;

use super::config::RuleConfig;
use super::error::{RuleSetError, RuleSetResult};
use super::rule::Rule;

/// A collection of rules keyed by name. Names are unique; inserting a
/// duplicate is an error, never a silent overwrite.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: HashMap<RuleName, Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set preloaded with the four built-in rules under their canonical
    /// names (`digits`, `phone-number`, `email`, `india-vehicle-plate`).
    pub fn with_builtins() -> Self {
        let mut set = Self::new();

        for kind in RuleKind::ALL {
            let rule = Rule::from_kind(kind);
            set.rules.insert(rule.name().to_string(), rule);
        }

        set
    }

    pub fn from_configs<I>(configs: I) -> RuleSetResult<Self>
    where
        I: IntoIterator<Item = RuleConfig>,
    {
        let mut set = Self::new();

        for config in configs {
            let rule = Rule::new(config.name.clone(), &config.pattern, config.flags())?;
            set.insert(rule)?;
        }

        Ok(set)
    }

    /// Builds a set from a JSON array of rule configs, failing fast on the
    /// first malformed pattern or duplicate name.
    pub fn from_json(json: &str) -> RuleSetResult<Self> {
        let configs: Vec<RuleConfig> =
            serde_json::from_str(json).map_err(|source| RuleSetError::Config { source })?;

        Self::from_configs(configs)
    }

    pub fn insert(&mut self, rule: Rule) -> RuleSetResult<()> {
        if self.rules.contains_key(rule.name()) {
            return Err(RuleSetError::DuplicateRule {
                name: rule.name().to_string(),
            });
        }

        self.rules.insert(rule.name().to_string(), rule);
        Ok(())
    }

    #[tracing::instrument(level = "trace", skip(self, text), fields(rule=%name))]
    pub fn is_match(&self, name: &str, text: &str) -> RuleSetResult<bool> {
        match self.rules.get(name) {
            Some(rule) => Ok(rule.is_match(text)),
            None => {
                tracing::event!(tracing::Level::DEBUG, rule = %name, "unknown rule");

                Err(RuleSetError::UnknownRule {
                    name: name.to_string(),
                })
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
