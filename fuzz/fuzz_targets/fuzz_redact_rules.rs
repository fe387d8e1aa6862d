//! Fuzz target for rule compilation and substitution.
//!
//! The first line of input is a rule, the rest is the message and a field
//! value. Redaction must never panic, whatever the rule text.

#![no_main]

use hl_common::{Level, LogEvent};
use hl_redact::redact;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let (rule, rest) = text.split_once('\n').unwrap_or((&*text, ""));

    let mut event = LogEvent::new(Level::Info, rest).with_field("payload", rest);
    let _ = redact(&[rule], &mut event);
});
