//! Declarative edit rules and rule files.

use patch_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::edit::Edit;
use crate::error::Result;
use crate::remove::BlockRemoval;
use crate::replace::ExactReplacement;

/// One edit to apply to a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Rule {
    RemoveBlock(BlockRemoval),
    Replace(ExactReplacement),
}

impl Rule {
    pub fn name(&self) -> Option<&str> {
        match self {
            Rule::RemoveBlock(r) => r.name.as_deref(),
            Rule::Replace(r) => r.name.as_deref(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Rule::RemoveBlock(_) => "remove-block",
            Rule::Replace(_) => "replace",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Rule::RemoveBlock(r) => r.validate(),
            Rule::Replace(r) => r.validate(),
        }
    }

    /// Apply to `source`. `None` means the rule matched nothing.
    pub fn apply(&self, source: &str) -> Result<Option<(String, Edit)>> {
        match self {
            Rule::RemoveBlock(r) => r.apply(source),
            Rule::Replace(r) => r.apply(source).map(Some),
        }
    }
}

impl From<BlockRemoval> for Rule {
    fn from(rule: BlockRemoval) -> Self {
        Rule::RemoveBlock(rule)
    }
}

impl From<ExactReplacement> for Rule {
    fn from(rule: ExactReplacement) -> Self {
        Rule::Replace(rule)
    }
}

/// A rule file: an optional target and the rules to apply to it, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Target file, relative to the rule file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    /// Load a TOML, JSON or YAML rule file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let set: RuleSet = ConfigStore::new().load(path)?;
        tracing::debug!(path = %path, rules = set.rules.len(), "loaded rule file");
        Ok(set)
    }

    /// The declared target, resolved against the directory of `rules_path`.
    pub fn resolve_target(&self, rules_path: &NormalizedPath) -> Option<NormalizedPath> {
        let target = self.target.as_deref()?;
        Some(match rules_path.parent() {
            Some(dir) => dir.join(target),
            None => NormalizedPath::new(target),
        })
    }
}
