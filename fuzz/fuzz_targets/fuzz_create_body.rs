//! Fuzz target: JSON parsing and validation of `CreateBookmarkBody`.
//!
//! Arbitrary bytes must either be rejected or yield a bookmark whose rating
//! is in range and whose title and url are non-blank.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shelf_gateway::body::CreateBookmarkBody;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<CreateBookmarkBody>(data) else {
        return;
    };
    if let Ok(new) = body.validate() {
        assert!((1..=5).contains(&new.rating.value()));
        assert!(!new.title.trim().is_empty());
        assert!(!new.url.trim().is_empty());
    }
});
