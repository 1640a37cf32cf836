use axum::extract::FromRequest;

use crate::error::Error;

/// `axum::Json` whose rejection becomes an [`Error`], so malformed bodies get
/// the same `{"error": ...}` response as every other console failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);
