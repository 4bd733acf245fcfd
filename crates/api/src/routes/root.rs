//! Root route handler.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::config::PublicSettings;
use crate::state::AppState;

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub config: PublicSettings,
}

/// Welcome message plus the running configuration, secrets redacted.
///
/// GET /
pub async fn index(State(state): State<AppState>) -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the API",
        config: state.config().public_settings(),
    })
}
