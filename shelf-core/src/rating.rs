use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A bookmark rating in the inclusive range `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;

    /// Creates a `Rating` from a value in `[1, 5]`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidRating`] if `value` is outside `[1, 5]`.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(CoreError::InvalidRating { value: value.to_string() }),
        }
    }

    /// Returns the inner value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rating as it arrives from a client, before validation.
///
/// Clients send either a JSON number or a numeric string. Nothing is coerced
/// implicitly: [`RatingInput::parse`] is the only way to obtain a [`Rating`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RatingInput {
    /// Validate the raw input into a [`Rating`].
    ///
    /// Integral floats such as `3.0` are accepted; fractional values,
    /// non-numeric strings and anything outside `[1, 5]` are rejected.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidRating`] carrying the offending input.
    pub fn parse(&self) -> Result<Rating, CoreError> {
        match self {
            Self::Integer(n) => Rating::new(*n),
            Self::Float(f) => {
                if f.fract() != 0.0 || !f.is_finite() || f.abs() > 1e9 {
                    return Err(CoreError::InvalidRating { value: f.to_string() });
                }
                #[allow(clippy::cast_possible_truncation)]
                let whole = *f as i64;
                Rating::new(whole)
            }
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| CoreError::InvalidRating { value: format!("'{s}'") })
                .and_then(Rating::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(5).is_ok());
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(-3).is_err());
        assert!(Rating::new(i64::MAX).is_err());
    }

    #[test]
    fn rating_input_accepts_numeric_string() {
        let input = RatingInput::Text(" 4 ".to_owned());
        assert_eq!(input.parse().map(Rating::value), Ok(4));
    }

    #[test]
    fn rating_input_rejects_non_numeric_string() {
        let input = RatingInput::Text("great".to_owned());
        match input.parse() {
            Err(CoreError::InvalidRating { value }) => assert_eq!(value, "'great'"),
            other => panic!("expected InvalidRating, got {other:?}"),
        }
    }

    #[test]
    fn rating_input_rejects_fractional_float() {
        assert!(RatingInput::Float(3.5).parse().is_err());
        assert!(RatingInput::Float(f64::NAN).parse().is_err());
        assert_eq!(RatingInput::Float(2.0).parse().map(Rating::value), Ok(2));
    }

    #[test]
    fn rating_input_deserializes_number_and_string() {
        let n: RatingInput = match serde_json::from_str("3") {
            Ok(v) => v,
            Err(e) => panic!("number should deserialize: {e}"),
        };
        assert_eq!(n, RatingInput::Integer(3));

        let s: RatingInput = match serde_json::from_str("\"3\"") {
            Ok(v) => v,
            Err(e) => panic!("string should deserialize: {e}"),
        };
        assert_eq!(s, RatingInput::Text("3".to_owned()));

        assert!(serde_json::from_str::<RatingInput>("true").is_err());
    }

    #[test]
    fn rating_serializes_as_plain_integer() {
        let rating = match Rating::new(5) {
            Ok(r) => r,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(serde_json::to_string(&rating).ok().as_deref(), Some("5"));
        assert!(serde_json::from_str::<Rating>("9").is_err(), "out of range must not deserialize");
    }
}
