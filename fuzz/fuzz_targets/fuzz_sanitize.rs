//! Fuzz target: HTML sanitizer on arbitrary UTF-8.
//!
//! Must never panic, its output must never carry an inline script, and a
//! second pass must not change it.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let clean = shelf_core::sanitize_text(input);
    assert!(!clean.to_ascii_lowercase().contains("<script"));
    assert_eq!(shelf_core::sanitize_text(&clean), clean);
});
