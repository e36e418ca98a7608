//! Property tests for rating validation and sanitizer stability.

use proptest::prelude::*;
use shelf_core::{sanitize_text, Rating, RatingInput};

const FRAGMENTS: &[&str] = &[
    "plain",
    "words here",
    " & ",
    "&",
    "&amp;",
    "&copy",
    "&#38;",
    "?q=rust&page=2",
    " < ",
    " > ",
    "<b>",
    "</b>",
    "<em>",
    "</em>",
    "<img onerror=x />",
    "<img src=\"a.png\" onload=\"go()\">",
    "<script>alert(1)</script>",
    "<a href=\"https://x.com\">",
    "<a href=\"javascript:void(0)\">",
    "</a>",
];

fn html_fragment() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn rating_accepts_exactly_one_to_five(n in -1000_i64..1000) {
        let accepted = Rating::new(n).is_ok();
        prop_assert_eq!(accepted, (1..=5).contains(&n));
    }

    #[test]
    fn rating_text_matches_integer_rule(n in -50_i64..50) {
        let from_text = RatingInput::Text(n.to_string()).parse().ok();
        let from_int = RatingInput::Integer(n).parse().ok();
        prop_assert_eq!(from_text, from_int);
    }

    #[test]
    fn non_numeric_text_is_rejected(s in "[a-zA-Z ]{1,12}") {
        prop_assert!(RatingInput::Text(s).parse().is_err());
    }

    #[test]
    fn sanitize_is_idempotent(input in html_fragment()) {
        let once = sanitize_text(&input);
        let twice = sanitize_text(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(!once.contains("onerror"));
        prop_assert!(!once.contains("<script"));
    }

    #[test]
    fn text_without_angle_brackets_is_untouched(input in "[a-zA-Z0-9 &;#=?/:.]{0,40}") {
        prop_assert_eq!(sanitize_text(&input), input);
    }
}
