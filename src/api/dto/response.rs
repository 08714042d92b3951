//! Uniform response envelope shared by the save, update and delete endpoints.

use serde::{Deserialize, Serialize};

/// Outcome marker carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// `{ "status": "OK" | "Error", "error": "..." }`
///
/// The HTTP status code is always 200; callers inspect `status` and `error`.
/// `error` is omitted from the JSON when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl Envelope {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            error: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}
