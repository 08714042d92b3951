//! HTTP request handlers.
//!
//! Each handler depends on a single storage capability and never changes the
//! HTTP status code on domain errors; the redirect handler is the only one
//! that answers with something other than an envelope.

pub mod delete;
pub mod redirect;
pub mod save;
pub mod update;

pub use delete::delete_handler;
pub use redirect::redirect_handler;
pub use save::save_handler;
pub use update::update_handler;
