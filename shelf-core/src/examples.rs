//! Sample bookmarks used by tests and for seeding a fresh store.

use crate::{bookmark::NewBookmark, error::CoreError, rating::Rating};

/// Returns four valid bookmarks covering rating extremes, a missing
/// description and a description carrying markup.
///
/// # Errors
/// Never fails in practice; the fixtures are validated like client input.
pub fn example_bookmarks() -> Result<Vec<NewBookmark>, CoreError> {
    Ok(vec![
        NewBookmark::new(
            "Thinkful".to_owned(),
            "https://www.thinkful.com".to_owned(),
            Rating::new(5)?,
            Some("Think outside the classroom".to_owned()),
        )?,
        NewBookmark::new(
            "Google".to_owned(),
            "https://www.google.com".to_owned(),
            Rating::new(4)?,
            Some("Where we find everything else".to_owned()),
        )?,
        NewBookmark::new(
            "MDN".to_owned(),
            "https://developer.mozilla.org".to_owned(),
            Rating::new(1)?,
            None,
        )?,
        NewBookmark::new(
            "Suspicious".to_owned(),
            "https://example.com".to_owned(),
            Rating::new(2)?,
            Some(r#"Looks <b>fine</b> <img src="https://example.com/x.png" onerror="alert(1)">"#.to_owned()),
        )?,
    ])
}
