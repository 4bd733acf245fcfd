//! Order route handlers.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::instrument;

use kohinoor_core::{Order, RawDocument, Stored};

use super::MessageResponse;
use crate::error::{AppError, Result};
use crate::services::email;
use crate::state::AppState;

/// Response message for a stored and confirmed order.
pub const ORDER_CREATED: &str = "Order created successfully";

/// List every stored order with its `_id` rendered as text.
///
/// GET /showOrders
#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Stored<RawDocument>>>> {
    let orders = state.orders().list_all().await?;
    Ok(Json(orders))
}

/// Store an order, then mail the customer a confirmation.
///
/// POST /order/
///
/// The order is persisted before any mail is attempted. If delivery fails the
/// order stays stored and the request fails with a server error.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Order>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(order) = payload?;

    let id = state
        .orders()
        .insert(&order)
        .await
        .map_err(AppError::Insert)?;
    tracing::info!(order_id = %id, city = %order.city, total = order.total, "Order stored");

    let confirmation = email::order_confirmation(&order, &state.config().mail.signature)?;
    if let Err(e) = state.mailer().send(&confirmation).await {
        tracing::error!(order_id = %id, error = %e, "Order stored but confirmation not sent");
        return Err(e.into());
    }

    Ok(Json(MessageResponse::new(ORDER_CREATED)))
}
