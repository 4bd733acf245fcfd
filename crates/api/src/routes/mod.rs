//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /               - Welcome message and running configuration
//! GET  /health         - Liveness check
//!
//! # Orders
//! GET  /showOrders     - Every stored order
//! POST /order/         - Store an order, mail the customer
//!
//! # Feedback
//! GET  /showFeedbacks  - Every stored feedback entry
//! POST /feedback/      - Store feedback, notify the owner
//! ```
//!
//! The POST routes also answer without the trailing slash.

pub mod feedback;
pub mod orders;
pub mod root;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// Body of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/showOrders", get(orders::list))
        .route("/order/", post(orders::create))
        .route("/order", post(orders::create))
}

/// Create the feedback routes router.
pub fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/showFeedbacks", get(feedback::list))
        .route("/feedback/", post(feedback::create))
        .route("/feedback", post(feedback::create))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root::index))
        .route("/health", get(health))
        .merge(order_routes())
        .merge(feedback_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
