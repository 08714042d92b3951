//! Shared application state injected into handlers.

use axum::extract::FromRef;
use std::sync::Arc;

use crate::api::middleware::basic_auth::BasicCredentials;
use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlRepository, UrlSaver, UrlUpdater};

/// Dependencies shared by every request.
///
/// One storage instance backs all four capabilities. Each handler extracts
/// only the capability it needs via [`FromRef`], e.g.
/// `State(saver): State<Arc<dyn UrlSaver>>`.
#[derive(Clone)]
pub struct AppState {
    pub saver: Arc<dyn UrlSaver>,
    pub getter: Arc<dyn UrlGetter>,
    pub updater: Arc<dyn UrlUpdater>,
    pub deleter: Arc<dyn UrlDeleter>,
    pub credentials: Arc<BasicCredentials>,
}

impl AppState {
    pub fn new<R>(repository: Arc<R>, credentials: BasicCredentials) -> Self
    where
        R: UrlRepository + 'static,
    {
        Self {
            saver: repository.clone(),
            getter: repository.clone(),
            updater: repository.clone(),
            deleter: repository,
            credentials: Arc::new(credentials),
        }
    }
}

impl FromRef<AppState> for Arc<dyn UrlSaver> {
    fn from_ref(state: &AppState) -> Self {
        state.saver.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UrlGetter> {
    fn from_ref(state: &AppState) -> Self {
        state.getter.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UrlUpdater> {
    fn from_ref(state: &AppState) -> Self {
        state.updater.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UrlDeleter> {
    fn from_ref(state: &AppState) -> Self {
        state.deleter.clone()
    }
}
