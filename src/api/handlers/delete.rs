//! Handler for the delete endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::dto::response::Envelope;
use crate::domain::repositories::UrlDeleter;
use crate::error::StorageError;

/// Permanently removes an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (basic auth)
///
/// # Response
///
/// Always `200 OK` with a plain envelope. Failures: `url not found`,
/// `internal error`, `invalid request` for an empty alias.
#[tracing::instrument(name = "handlers.url.delete", skip(deleter))]
pub async fn delete_handler(
    State(deleter): State<Arc<dyn UrlDeleter>>,
    Path(alias): Path<String>,
) -> Json<Envelope> {
    if alias.is_empty() {
        info!("alias is empty");
        return Json(Envelope::error("invalid request"));
    }

    match deleter.delete_url(&alias).await {
        Ok(()) => {
            info!("url deleted");
            Json(Envelope::ok())
        }
        Err(StorageError::NotFound) => {
            info!("url not found");
            Json(Envelope::error("url not found"))
        }
        Err(err) => {
            error!(error = %err, "failed to delete url");
            Json(Envelope::error("internal error"))
        }
    }
}
