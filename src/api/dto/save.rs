//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::response::Envelope;
use super::validation::{FieldNames, validate_absolute_url};

/// Request body for `POST /url`.
///
/// ```json
/// { "url": "https://api.kanye.rest", "alias": "kanye" }
/// ```
///
/// A missing or empty `alias` makes the server generate one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SaveRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_absolute_url"))]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl SaveRequest {
    /// Returns the client-supplied alias, treating an empty string as absent.
    pub fn requested_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }
}

impl FieldNames for SaveRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = &[("url", "URL")];
}

/// Response for `POST /url`: the envelope plus the effective alias and its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub envelope: Envelope,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alias: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl SaveResponse {
    pub fn ok(alias: String, id: i64) -> Self {
        Self {
            envelope: Envelope::ok(),
            alias,
            id: Some(id),
        }
    }
}

impl From<Envelope> for SaveResponse {
    fn from(envelope: Envelope) -> Self {
        Self {
            envelope,
            alias: String::new(),
            id: None,
        }
    }
}
