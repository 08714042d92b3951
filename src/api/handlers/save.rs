//! Handler for the save endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use validator::Validate;

use crate::api::dto::response::Envelope;
use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::api::dto::validation::validation_error;
use crate::domain::repositories::UrlSaver;
use crate::error::StorageError;
use crate::utils::alias_generator::{ALIAS_LENGTH, generate_alias};

/// How many generated aliases are tried before a collision is reported.
const MAX_GENERATED_ALIAS_ATTEMPTS: usize = 5;

/// Stores a new alias → URL mapping.
///
/// # Endpoint
///
/// `POST /url` (basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://api.kanye.rest", "alias": "kanye" }
/// ```
///
/// # Response
///
/// Always `200 OK`:
///
/// ```json
/// { "status": "OK", "alias": "kanye", "id": 1 }
/// { "status": "Error", "error": "url already exists" }
/// ```
///
/// When `alias` is missing or empty a random one is generated; if the
/// generated alias is taken, a new one is drawn.
#[tracing::instrument(name = "handlers.url.save", skip_all)]
pub async fn save_handler(
    State(saver): State<Arc<dyn UrlSaver>>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Json<SaveResponse> {
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
        return Json(validation_error::<SaveRequest>(&errors).into());
    }

    let saved = match request.requested_alias() {
        Some(alias) => saver
            .save_url(&request.url, alias)
            .await
            .map(|id| (id, alias.to_string())),
        None => save_with_generated_alias(saver.as_ref(), &request.url).await,
    };

    match saved {
        Ok((id, alias)) => {
            info!(id, alias = %alias, url = %request.url, "url added");
            Json(SaveResponse::ok(alias, id))
        }
        Err(StorageError::AlreadyExists) => {
            info!(url = %request.url, "url already exists");
            Json(Envelope::error("url already exists").into())
        }
        Err(err) => {
            error!(error = %err, "failed to add url");
            Json(Envelope::error("failed to add url").into())
        }
    }
}

/// Saves `url` under a random alias, drawing a new alias on collision.
async fn save_with_generated_alias(
    saver: &dyn UrlSaver,
    url: &str,
) -> Result<(i64, String), StorageError> {
    let mut attempt = 1;

    loop {
        let alias = generate_alias(ALIAS_LENGTH);

        match saver.save_url(url, &alias).await {
            Ok(id) => return Ok((id, alias)),
            Err(StorageError::AlreadyExists) if attempt < MAX_GENERATED_ALIAS_ATTEMPTS => {
                warn!(alias = %alias, attempt, "generated alias is taken, retrying");
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
