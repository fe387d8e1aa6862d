//! The redaction hook a logging framework drives.

use crate::{CompiledRules, HookConfig, RedactionError, Result};
use hl_common::{accepted_levels, Hook, Level, LogEvent};

/// Redacts sensitive field keys, field values and messages before dispatch.
///
/// Rules are compiled once in [`RedactHook::new`], so a malformed rule is
/// reported when the hook is built and [`Hook::fire`] never fails.
#[derive(Debug, Clone, Default)]
pub struct RedactHook {
    accepted_levels: Vec<Level>,
    rules: CompiledRules,
}

impl RedactHook {
    pub fn new(config: HookConfig) -> Result<Self> {
        let rules = config.compile_rules()?;
        tracing::debug!(
            rules = rules.len(),
            accepted_levels = config.accepted_levels.len(),
            "redaction hook configured"
        );
        Ok(Self {
            accepted_levels: config.accepted_levels,
            rules,
        })
    }

    /// Build a hook that runs for every level.
    pub fn with_rules<I, S>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            accepted_levels: Vec::new(),
            rules: CompiledRules::compile(rules)?,
        })
    }

    pub fn rules(&self) -> &CompiledRules {
        &self.rules
    }
}

impl TryFrom<HookConfig> for RedactHook {
    type Error = RedactionError;

    fn try_from(config: HookConfig) -> Result<Self> {
        Self::new(config)
    }
}

impl Hook for RedactHook {
    type Error = RedactionError;

    fn levels(&self) -> Vec<Level> {
        accepted_levels(&self.accepted_levels)
    }

    fn fire(&self, event: &mut LogEvent) -> Result<()> {
        self.rules.apply(event);
        Ok(())
    }
}
