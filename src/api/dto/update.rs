//! DTOs for the update endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::response::Envelope;
use super::validation::{FieldNames, validate_absolute_url};

/// Request body for `PUT /url`.
///
/// ```json
/// { "url": "https://mail.google.com/", "old_alias": "mail", "new_alias": "moil" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_absolute_url"))]
    pub url: String,

    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub old_alias: String,

    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub new_alias: String,
}

impl FieldNames for UpdateRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("url", "URL"),
        ("old_alias", "OldAlias"),
        ("new_alias", "NewAlias"),
    ];
}

/// Response for `PUT /url`: the envelope plus the new alias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    #[serde(flatten)]
    pub envelope: Envelope,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alias: String,
}

impl UpdateResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            envelope: Envelope::ok(),
            alias,
        }
    }
}

impl From<Envelope> for UpdateResponse {
    fn from(envelope: Envelope) -> Self {
        Self {
            envelope,
            alias: String::new(),
        }
    }
}
