//! HTML sanitization of client-visible bookmark text.
//!
//! Bookmarks are stored exactly as submitted. Everything leaving the service
//! passes through [`sanitize_bookmark`] first, which keeps benign markup
//! (`<b>`, `<img src>`, links) and drops scripts, event-handler attributes
//! and `javascript:` URLs. Text without markup is returned untouched.

use crate::bookmark::Bookmark;

const ESCAPED_AMPERSAND: &str = "&amp;";

/// Strip active content from a fragment of untrusted HTML.
///
/// Input without a `<` cannot carry markup and comes back unchanged, so
/// URLs with query strings and titles like `Tom & Jerry` survive as sent.
/// The output is stable: feeding it back in returns it unchanged.
#[must_use]
pub fn sanitize_text(input: &str) -> String {
    if !input.contains('<') {
        return input.to_owned();
    }
    restore_bare_ampersands(&ammonia::clean(input))
}

/// Undo ammonia's `&amp;` wherever a bare `&` could not start a character
/// reference, i.e. when the next character is not alphanumeric or `#`.
fn restore_bare_ampersands(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(pos) = rest.find(ESCAPED_AMPERSAND) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + ESCAPED_AMPERSAND.len()..];
        let starts_reference = after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '#');
        out.push_str(if starts_reference { ESCAPED_AMPERSAND } else { "&" });
        rest = after;
    }
    out.push_str(rest);
    out
}

/// Return a copy of `bookmark` with its free-text fields sanitized.
///
/// `id` and `rating` are copied through unchanged.
#[must_use]
pub fn sanitize_bookmark(bookmark: &Bookmark) -> Bookmark {
    Bookmark::new(
        bookmark.id,
        sanitize_text(&bookmark.title),
        sanitize_text(&bookmark.url),
        bookmark.rating,
        bookmark.description.as_deref().map(sanitize_text),
    )
}
