//! Fuzz target for hook configuration parsing.
//!
//! Arbitrary JSON must parse or fail cleanly, and a parsed config must either
//! build a hook or report a pattern error.

#![no_main]

use hl_redact::{HookConfig, RedactHook};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = HookConfig::from_json_str(text) {
        let _ = RedactHook::new(config);
    }
});
