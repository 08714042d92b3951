//! Field validation rules and the message format for validation failures.

use url::Url;
use validator::{ValidationError, ValidationErrors};

use super::response::Envelope;

/// Error code for a missing or empty required field.
pub const CODE_REQUIRED: &str = "required";

/// Error code for a value that is not an absolute URL.
pub const CODE_URL: &str = "url";

/// Maps request struct fields to the names used in validation messages.
///
/// `FIELDS` lists `(field, display name)` pairs in declaration order; messages
/// for several invalid fields are reported in that order.
pub trait FieldNames {
    const FIELDS: &'static [(&'static str, &'static str)];
}

/// Requires a non-empty value that parses as an absolute URL.
///
/// ASCII control characters are rejected even where the URL parser would
/// strip them; the raw value is what gets stored and redirected to.
pub fn validate_absolute_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(CODE_REQUIRED));
    }

    if value.chars().any(|c| c.is_ascii_control()) {
        return Err(ValidationError::new(CODE_URL));
    }

    Url::parse(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new(CODE_URL))
}

/// Builds the error envelope for a failed validation.
///
/// Each invalid field contributes `field <Name> is not valid`, or
/// `field <Name> is not a valid URL` for URL syntax failures. Only the first
/// failure of a field is reported. Messages are joined with `", "`.
pub fn validation_error<T: FieldNames>(errors: &ValidationErrors) -> Envelope {
    let field_errors = errors.field_errors();

    let messages: Vec<String> = T::FIELDS
        .iter()
        .filter_map(|(field, name)| {
            let first = field_errors.get(*field)?.first()?;

            Some(match first.code.as_ref() {
                CODE_URL => format!("field {name} is not a valid URL"),
                _ => format!("field {name} is not valid"),
            })
        })
        .collect();

    Envelope::error(messages.join(", "))
}
