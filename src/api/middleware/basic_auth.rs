//! HTTP Basic authentication middleware for the `/url` group.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_auth::AuthBasic;
use std::fmt;
use std::sync::Arc;

/// Realm announced in `WWW-Authenticate` challenges.
pub const REALM: &str = "shortlink";

/// The single login/password pair allowed to manage aliases.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    login: String,
    password: String,
}

impl BasicCredentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Returns true if the supplied pair matches. A missing password never matches.
    pub fn verify(&self, login: &str, password: Option<&str>) -> bool {
        login == self.login && password == Some(self.password.as_str())
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

/// Authenticates requests using the `Authorization: Basic` header.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(login:password)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic realm="shortlink"` if
/// the header is missing, malformed, or carries the wrong credentials.
///
/// # Example
///
/// ```rust,ignore
/// let protected = api::routes::protected_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), basic_auth::layer));
/// ```
pub async fn layer(
    State(credentials): State<Arc<BasicCredentials>>,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    let authorized = match AuthBasic::from_request_parts(&mut parts, &()).await {
        Ok(AuthBasic((login, password))) => credentials.verify(&login, password.as_deref()),
        Err(_) => false,
    };

    if !authorized {
        tracing::info!(uri = %parts.uri, "unauthorized request");
        return unauthorized();
    }

    next.run(Request::from_parts(parts, body)).await
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, format!("Basic realm=\"{REALM}\""))],
        "Unauthorized",
    )
        .into_response()
}
