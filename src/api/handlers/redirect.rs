//! Handler for alias redirects.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info};

use crate::domain::repositories::UrlGetter;
use crate::error::StorageError;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}` (public)
///
/// # Response
///
/// - `302 Found` with `Location` set to the stored URL
/// - `200 OK` with a bare JSON string on failure: `"url not found"`,
///   `"internal error"` or `"invalid request"`
///
/// Unlike the `/url` endpoints, failures are not wrapped in an envelope.
#[tracing::instrument(name = "handlers.redirect", skip(getter))]
pub async fn redirect_handler(
    State(getter): State<Arc<dyn UrlGetter>>,
    Path(alias): Path<String>,
) -> Response {
    if alias.is_empty() {
        info!("alias is empty");
        return Json("invalid request").into_response();
    }

    match getter.get_url(&alias).await {
        Ok(url) => match HeaderValue::from_bytes(url.as_bytes()) {
            Ok(location) => {
                info!(url = %url, "got url");
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
            Err(err) => {
                error!(error = %err, url = ?url, "stored url is not a valid Location");
                Json("internal error").into_response()
            }
        },
        Err(StorageError::NotFound) => {
            info!("url not found");
            Json("url not found").into_response()
        }
        Err(err) => {
            error!(error = %err, "failed to get url");
            Json("internal error").into_response()
        }
    }
}
