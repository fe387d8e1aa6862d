//! Integration tests for hl-redact.
//!
//! These tests verify:
//! - Key matches replace whole values, value matches replace only the span
//! - Every field value kind is handled through its text form
//! - Malformed rules surface as pattern errors without rollback
//! - Secrets never show up in the hook's own log output

use hl_common::{FieldValue, Hook, Level, LogEvent, TypedStr};
use hl_redact::{redact, HookConfig, RedactHook, RedactionError, REDACTION_MARKER};
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

struct Credentials {
    user: String,
    password: String,
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user={} password={}", self.user, self.password)
    }
}

fn redacted() -> FieldValue {
    FieldValue::from(REDACTION_MARKER)
}

// ============================================================================
// Key and value matching
// ============================================================================

#[test]
fn test_redact_with_key() {
    let mut event = LogEvent::new(Level::Info, "").with_field("secretKey", "secret!");
    redact(&["secretKey"], &mut event).unwrap();
    assert_eq!(event.field("secretKey"), Some(&redacted()));
}

#[test]
fn test_key_match_is_substring() {
    let mut event = LogEvent::new(Level::Info, "")
        .with_field("db_password_hash", "abc")
        .with_field("user", "carol");
    redact(&["password"], &mut event).unwrap();
    assert_eq!(event.field("db_password_hash"), Some(&redacted()));
    assert_eq!(event.field("user"), Some(&FieldValue::from("carol")));
}

#[test]
fn test_redact_partial_value() {
    let mut event =
        LogEvent::new(Level::Info, "").with_field("Description", "His name is William");
    redact(&["William"], &mut event).unwrap();
    assert_eq!(
        event.field("Description"),
        Some(&FieldValue::from("His name is [REDACTED]"))
    );
}

#[test]
fn test_whole_value_match_becomes_marker() {
    let mut event = LogEvent::new(Level::Info, "").with_field("name", "William");
    redact(&["William"], &mut event).unwrap();
    assert_eq!(event.field("name"), Some(&redacted()));
}

#[test]
fn test_redact_message_with_leading_group() {
    let mut event = LogEvent::new(Level::Error, "Secret Password: password123!");
    redact(&["(Password: ).*"], &mut event).unwrap();
    assert_eq!(event.message, "Secret Password: [REDACTED]");
}

#[test]
fn test_redact_message_with_both_groups() {
    let mut event = LogEvent::new(Level::Error, r#"request {"apiKey":"k-991","id":4}"#);
    redact(&[r#"("apiKey":")[^"]*(")"#], &mut event).unwrap();
    assert_eq!(event.message, r#"request {"apiKey":"[REDACTED]","id":4}"#);
}

// ============================================================================
// Value kinds
// ============================================================================

#[test]
fn test_nil_field_untouched() {
    let mut event = LogEvent::new(Level::Info, "").with_field("Nil", FieldValue::Null);
    redact(&["William"], &mut event).unwrap();
    assert_eq!(event.field("Nil"), Some(&FieldValue::Null));
}

#[test]
fn test_display_field_coerced_to_text() {
    let creds = Credentials {
        user: "dave".to_string(),
        password: "hunter2".to_string(),
    };
    let mut event = LogEvent::new(Level::Info, "").with_field("login", FieldValue::display(creds));
    redact(&["(password=).*"], &mut event).unwrap();
    assert_eq!(
        event.field("login"),
        Some(&FieldValue::Str("user=dave password=[REDACTED]".to_string()))
    );
}

#[test]
fn test_nil_display_field_skipped() {
    let mut event = LogEvent::new(Level::Info, "")
        .with_field("login", FieldValue::display_opt::<Credentials>(None));
    redact(&["password", "user"], &mut event).unwrap();
    assert_eq!(event.field("login"), Some(&FieldValue::Display(None)));
}

#[test]
fn test_typed_string_field() {
    let mut event = LogEvent::new(Level::Info, "")
        .with_field("contact", TypedStr::new("Email", "william@example.com"));
    redact(&["@example\\.com"], &mut event).unwrap();
    assert_eq!(
        event.field("contact"),
        Some(&FieldValue::from("william[REDACTED]"))
    );
}

#[test]
fn test_json_field_rendered_generically() {
    let mut event = LogEvent::new(Level::Info, "")
        .with_field("card", serde_json::json!({"number": "4111111111111111"}));
    redact(&[r"\d{16}"], &mut event).unwrap();
    assert_eq!(
        event.field("card"),
        Some(&FieldValue::from(r#"{"number":"[REDACTED]"}"#))
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_invalid_regex() {
    let mut event = LogEvent::new(Level::Info, "");
    let err = redact(&["\\"], &mut event).unwrap_err();
    assert!(matches!(err, RedactionError::Pattern { ref pattern, .. } if pattern == "\\"));
    assert!(err.to_string().contains("invalid redaction rule"));
}

#[test]
fn test_invalid_regex_keeps_earlier_changes() {
    let mut event = LogEvent::new(Level::Info, "pin 1234")
        .with_field("token", "abc")
        .with_field("note", "pin 1234");
    let result = redact(&["token", "(unclosed", r"\d+"], &mut event);

    assert!(result.is_err());
    assert_eq!(event.field("token"), Some(&redacted()));
    // The rule after the failing one never ran.
    assert_eq!(event.field("note"), Some(&FieldValue::from("pin 1234")));
    assert_eq!(event.message, "pin 1234");
}

#[test]
fn test_hook_reports_bad_rule_at_construction() {
    let config = HookConfig::from_json_str(r#"{"redaction_list": ["ok", "a{2"]}"#).unwrap();
    let err = RedactHook::new(config).unwrap_err();
    assert_eq!(err.pattern(), Some("a{2"));
}

// ============================================================================
// Hook behaviour
// ============================================================================

#[test]
fn test_hook_end_to_end() {
    let config = HookConfig::from_json_str(
        r#"{
            "accepted_levels": ["panic", "fatal", "error", "warn"],
            "redaction_list": ["password", "(Bearer )\\S+"]
        }"#,
    )
    .unwrap();
    let hook = RedactHook::new(config).unwrap();

    let mut event = LogEvent::new(Level::Warn, "auth header Bearer eyJhbGciOi.x.y rejected")
        .with_field("password", "hunter2")
        .with_field("header", "Bearer abc.def")
        .with_field("attempt", 3i64);

    assert!(hook.accepts(event.level));
    assert!(!hook.accepts(Level::Info));
    hook.fire(&mut event).unwrap();

    assert_eq!(event.message, "auth header Bearer [REDACTED] rejected");
    assert_eq!(event.field("password"), Some(&redacted()));
    assert_eq!(event.field("header"), Some(&FieldValue::from("Bearer [REDACTED]")));
    // Structured values come back as their text form.
    assert_eq!(event.field("attempt"), Some(&FieldValue::from("3")));
}

#[test]
fn test_hook_is_idempotent() {
    let hook = RedactHook::with_rules(["secret", "William", "(Password: ).*"]).unwrap();
    let mut event = LogEvent::new(Level::Info, "Password: p4ss for William")
        .with_field("secret", "x")
        .with_field("who", "William Jones");

    hook.fire(&mut event).unwrap();
    let once = event.clone();
    hook.fire(&mut event).unwrap();

    assert_eq!(event, once);
}

#[test]
fn test_hook_shared_across_threads() {
    let hook = Arc::new(RedactHook::with_rules(["ssn"]).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let hook = Arc::clone(&hook);
            std::thread::spawn(move || {
                let mut event =
                    LogEvent::new(Level::Info, format!("worker {}", i)).with_field("ssn", "123");
                hook.fire(&mut event).unwrap();
                event
            })
        })
        .collect();

    for handle in handles {
        let event = handle.join().unwrap();
        assert_eq!(event.field("ssn"), Some(&redacted()));
    }
}

// ============================================================================
// Log output never carries the redacted values
// ============================================================================

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_debug_logs_do_not_leak_values() {
    let capture = CaptureWriter::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut event = LogEvent::new(Level::Info, "key sk-live-abcdef")
            .with_field("apiKey", "sk-live-abcdef")
            .with_field("note", "uses sk-live-abcdef");
        redact(&["apiKey", "sk-live-\\w+"], &mut event).unwrap();
    });

    let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("redacted field by key"));
    assert!(output.contains("redacted message"));
    assert!(!output.contains("abcdef"), "secret leaked into logs: {}", output);
}
