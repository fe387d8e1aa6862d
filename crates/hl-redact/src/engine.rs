//! Redaction engine.
//!
//! Rules are applied one full pass at a time, in configured order: each rule
//! visits every field and then the message before the next rule starts. A
//! later rule therefore sees text already rewritten by earlier ones.

use crate::rules::{CompiledRules, Rule, REDACTION_MARKER};
use crate::Result;
use hl_common::{FieldValue, LogEvent};
use std::borrow::Cow;
use tracing::{debug, trace_span};

/// Compile and apply `rules` to `event` in order.
///
/// Each rule is compiled just before it is applied. A malformed rule stops
/// processing and is returned as [`crate::RedactionError::Pattern`]; changes
/// made by earlier rules stay in the event.
pub fn redact<S: AsRef<str>>(rules: &[S], event: &mut LogEvent) -> Result<()> {
    for pattern in rules {
        let rule = Rule::new(pattern.as_ref())?;
        apply_rule(&rule, event);
    }
    Ok(())
}

impl CompiledRules {
    /// Apply every rule to `event` in order. Never fails.
    pub fn apply(&self, event: &mut LogEvent) {
        for rule in self {
            apply_rule(rule, event);
        }
    }
}

/// One pass of a single rule over the fields and the message.
pub(crate) fn apply_rule(rule: &Rule, event: &mut LogEvent) {
    let _span = trace_span!("redact_rule", rule = rule.as_str()).entered();

    for (key, value) in event.fields.iter_mut() {
        if rule.matches_key(key) {
            debug!(field = %key, rule = rule.as_str(), "redacted field by key");
            *value = FieldValue::from(REDACTION_MARKER);
            continue;
        }

        if let Some((text, matched)) = redact_value(rule, value) {
            if matched {
                debug!(field = %key, rule = rule.as_str(), "redacted field value");
            }
            *value = FieldValue::Str(text);
        }
    }

    if let Some(message) = owned_if_changed(rule.redact_text(&event.message)) {
        debug!(rule = rule.as_str(), "redacted message");
        event.message = message;
    }
}

/// Text to store back into a field and whether the rule matched.
///
/// `None` for nil values and for native text the rule did not match. Any
/// other value is coerced to its (possibly redacted) text form.
fn redact_value(rule: &Rule, value: &FieldValue) -> Option<(String, bool)> {
    let text = value.text()?;
    match rule.redact_text(&text) {
        Cow::Owned(redacted) => Some((redacted, true)),
        Cow::Borrowed(_) if matches!(value, FieldValue::Str(_)) => None,
        Cow::Borrowed(unchanged) => Some((unchanged.to_string(), false)),
    }
}

fn owned_if_changed(text: Cow<'_, str>) -> Option<String> {
    match text {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    }
}
