//! Feedback route handlers.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::instrument;

use kohinoor_core::{Feedback, RawDocument, Stored};

use super::MessageResponse;
use crate::error::{AppError, Result};
use crate::services::email;
use crate::state::AppState;

/// Response message once the owner has been notified.
pub const FEEDBACK_CREATED: &str = "Order notification sent successfully";

/// List every stored feedback entry with its `_id` rendered as text.
///
/// GET /showFeedbacks
#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Stored<RawDocument>>>> {
    let feedbacks = state.feedbacks().list_all().await?;
    Ok(Json(feedbacks))
}

/// Store feedback, then notify the shop owner.
///
/// POST /feedback/
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Feedback>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(feedback) = payload?;

    let id = state
        .feedbacks()
        .insert(&feedback)
        .await
        .map_err(AppError::Insert)?;
    tracing::info!(feedback_id = %id, "Feedback stored");

    let mail = &state.config().mail;
    let notification = email::owner_notification(mail.owner.as_deref(), &mail.signature)?;
    if let Err(e) = state.mailer().send(&notification).await {
        tracing::error!(feedback_id = %id, error = %e, "Feedback stored but owner not notified");
        return Err(e.into());
    }

    Ok(Json(MessageResponse::new(FEEDBACK_CREATED)))
}
