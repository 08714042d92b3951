//! Handler for the update endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;
use tracing::{debug, error, info};
use validator::Validate;

use crate::api::dto::response::Envelope;
use crate::api::dto::update::{UpdateRequest, UpdateResponse};
use crate::api::dto::validation::validation_error;
use crate::domain::repositories::UrlUpdater;
use crate::error::StorageError;

/// Renames an alias and replaces its URL.
///
/// # Endpoint
///
/// `PUT /url` (basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://mail.google.com/", "old_alias": "mail", "new_alias": "moil" }
/// ```
///
/// # Response
///
/// Always `200 OK`; on success the envelope carries the new alias.
/// Failures: `url with this alias not found`, `url already exists` (the new
/// alias belongs to another record), `failed to update url`.
#[tracing::instrument(name = "handlers.url.update", skip_all)]
pub async fn update_handler(
    State(updater): State<Arc<dyn UrlUpdater>>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Json<UpdateResponse> {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            error!(error = %rejection, "failed to decode request body");
            return Json(Envelope::error("failed to decode request body").into());
        }
    };

    debug!(?request, "request body decoded");

    if let Err(errors) = request.validate() {
        error!(error = %errors, "invalid request");
        return Json(validation_error::<UpdateRequest>(&errors).into());
    }

    match updater
        .update_url(&request.url, &request.old_alias, &request.new_alias)
        .await
    {
        Ok(()) => {
            info!(url = %request.url, alias = %request.new_alias, "url updated");
            Json(UpdateResponse::ok(request.new_alias))
        }
        Err(StorageError::NotFound) => {
            info!(
                url = %request.url,
                old_alias = %request.old_alias,
                "url with this alias not found"
            );
            Json(Envelope::error("url with this alias not found").into())
        }
        Err(StorageError::AlreadyExists) => {
            info!(new_alias = %request.new_alias, "new alias is already taken");
            Json(Envelope::error("url already exists").into())
        }
        Err(err) => {
            error!(error = %err, "failed to update url");
            Json(Envelope::error("failed to update url").into())
        }
    }
}
