//! Application state shared across handlers.

use std::sync::Arc;

use kohinoor_core::{Feedback, Order};

use crate::config::AppConfig;
use crate::db::DocumentStore;
use crate::services::Mailer;

/// Store for order documents.
pub type OrderStore = Arc<dyn DocumentStore<Order>>;

/// Store for feedback documents.
pub type FeedbackStore = Arc<dyn DocumentStore<Feedback>>;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything in it is built once
/// at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    orders: OrderStore,
    feedbacks: FeedbackStore,
    mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - API configuration
    /// * `orders` - Orders collection
    /// * `feedbacks` - Feedback collection
    /// * `mailer` - Outgoing mail transport
    #[must_use]
    pub fn new(
        config: AppConfig,
        orders: OrderStore,
        feedbacks: FeedbackStore,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                orders,
                feedbacks,
                mailer,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get the orders collection.
    #[must_use]
    pub fn orders(&self) -> &dyn DocumentStore<Order> {
        self.inner.orders.as_ref()
    }

    /// Get the feedback collection.
    #[must_use]
    pub fn feedbacks(&self) -> &dyn DocumentStore<Feedback> {
        self.inner.feedbacks.as_ref()
    }

    /// Get the mail transport.
    #[must_use]
    pub fn mailer(&self) -> &dyn Mailer {
        self.inner.mailer.as_ref()
    }
}
