//! Redaction hook configuration.

use crate::{CompiledRules, Result};
use hl_common::Level;
use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::RedactHook`].
///
/// ```json
/// {
///   "accepted_levels": ["error", "warn"],
///   "redaction_list": ["password", "(token=)\\w+"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Levels the hook runs for. Empty means every level.
    pub accepted_levels: Vec<Level>,

    /// Redaction rules, applied in order.
    pub redaction_list: Vec<String>,
}

impl HookConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.redaction_list.push(rule.into());
        self
    }

    pub fn with_accepted_levels(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.accepted_levels = levels.into_iter().collect();
        self
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that every rule compiles.
    pub fn validate(&self) -> Result<()> {
        self.compile_rules().map(|_| ())
    }

    pub(crate) fn compile_rules(&self) -> Result<CompiledRules> {
        CompiledRules::compile(&self.redaction_list)
    }
}
