/// Errors produced by the `shelf-core` crate.
///
/// Every variant describes client input that was rejected before reaching
/// storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A field required at creation was absent.
    #[error("'{field}' is required")]
    MissingField { field: &'static str },

    /// A text field was supplied but blank.
    #[error("'{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// A rating was not an integer in `[1, 5]`.
    #[error("'rating' must be a number between 1 and 5, got {value}")]
    InvalidRating { value: String },

    /// A partial update carried none of the updatable fields.
    #[error("request body must contain at least one of 'title', 'url', 'rating' or 'description'")]
    NoFieldsSupplied,
}
