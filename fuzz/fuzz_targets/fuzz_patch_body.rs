//! Fuzz target: JSON parsing and validation of `PatchBookmarkBody`.
//!
//! A patch that validates always carries at least one field.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shelf_gateway::body::PatchBookmarkBody;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<PatchBookmarkBody>(data) else {
        return;
    };
    if let Ok(patch) = body.validate() {
        assert!(
            patch.title.is_some()
                || patch.url.is_some()
                || patch.rating.is_some()
                || patch.description.is_some()
        );
    }
});
