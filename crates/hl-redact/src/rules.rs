//! Redaction rules and the substitution primitive.
//!
//! A rule is a regular expression. It may define two capture groups around
//! the sensitive span; those groups are kept and only the text between them is
//! replaced by [`REDACTION_MARKER`]. With no groups the whole match is
//! replaced.

use crate::{RedactionError, Result};
use regex::Regex;
use std::borrow::Cow;
use tracing::warn;

/// Placeholder substituted for sensitive content.
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// Replacement template: leading group, marker, trailing group.
const REPLACEMENT: &str = "${1}[REDACTED]${2}";

/// Replace every match of `re` in `text`, keeping capture groups 1 and 2.
///
/// Returns `Cow::Borrowed` when nothing matched.
pub fn redact_text<'t>(re: &Regex, text: &'t str) -> Cow<'t, str> {
    re.replace_all(text, REPLACEMENT)
}

/// A single compiled redaction rule.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
}

impl Rule {
    /// Compile a rule from its pattern source.
    pub fn new(pattern: &str) -> Result<Self> {
        match Regex::new(pattern) {
            Ok(regex) => Ok(Self { regex }),
            Err(source) => {
                warn!(rule = pattern, error = %source, "failed to compile redaction rule");
                Err(RedactionError::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })
            }
        }
    }

    /// The pattern source this rule was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether the rule matches anywhere in `key`.
    pub fn matches_key(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }

    /// See [`redact_text`].
    pub fn redact_text<'t>(&self, text: &'t str) -> Cow<'t, str> {
        redact_text(&self.regex, text)
    }
}

/// An ordered, pre-compiled set of rules.
///
/// Compiling once up front validates the whole rule list at configuration
/// time and avoids recompiling for every event.
#[derive(Debug, Clone, Default)]
pub struct CompiledRules {
    rules: Vec<Rule>,
}

impl CompiledRules {
    /// Compile every rule, failing on the first malformed one.
    pub fn compile<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = patterns
            .into_iter()
            .map(|p| Rule::new(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a CompiledRules {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
