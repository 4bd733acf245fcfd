//! Document persistence for orders and feedback.
//!
//! # Database
//!
//! One MongoDB database holds two independent collections:
//!
//! - `COLLECTION_NAME` - orders, one document per checkout
//! - `COLLECTION_NAME02` - feedback, one document per contact form submission
//!
//! Documents are written once, exactly as submitted, and never updated or
//! deleted by this service. MongoDB assigns each document its `_id`.
//!
//! # Connection
//!
//! The client is built once at startup and shared by every request. The driver
//! connects lazily, so an unreachable server surfaces on the first query.

mod mongo;

use async_trait::async_trait;
use mongodb::Client;
use secrecy::ExposeSecret;
use thiserror::Error;

use kohinoor_core::{DocumentId, Feedback, Order, RawDocument, Stored};

use crate::config::StoreConfig;

pub use mongo::MongoStore;

/// Error type for persistence operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Error reported by the MongoDB driver.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Document could not be converted to BSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    /// Stored data does not match the expected shape.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Insert completed without reporting a generated identifier.
    #[error("insert did not report a document id")]
    MissingId,

    /// Store settings are missing.
    #[error("store not configured: {0}")]
    Configuration(String),
}

/// A collection of write-once documents.
#[async_trait]
pub trait DocumentStore<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Insert one document and return the identifier the store assigned.
    async fn insert(&self, document: &T) -> Result<DocumentId, RepositoryError>;

    /// Fetch every document in store iteration order.
    ///
    /// Documents come back as stored, not as `T`: fields `T` does not know
    /// about are kept and documents missing fields of `T` are still listed.
    async fn list_all(&self) -> Result<Vec<Stored<RawDocument>>, RepositoryError>;
}

/// The two collections the API writes to.
pub struct Collections {
    pub orders: MongoStore<Order>,
    pub feedbacks: MongoStore<Feedback>,
}

/// Build the MongoDB client and open both collections.
///
/// # Errors
///
/// Returns `RepositoryError::Configuration` if a store setting is missing, or
/// `RepositoryError::Database` if the connection string cannot be parsed.
pub async fn connect(config: &StoreConfig) -> Result<Collections, RepositoryError> {
    let url = config
        .url
        .as_ref()
        .ok_or_else(|| RepositoryError::Configuration("MONGODB_URL is not set".to_string()))?;
    let database = required(config.database.as_deref(), "DB_NAME")?;
    let orders = required(config.orders_collection.as_deref(), "COLLECTION_NAME")?;
    let feedbacks = required(config.feedbacks_collection.as_deref(), "COLLECTION_NAME02")?;

    let client = Client::with_uri_str(url.expose_secret()).await?;
    let database = client.database(database);

    tracing::info!(
        database = %database.name(),
        orders = %orders,
        feedbacks = %feedbacks,
        "MongoDB client created"
    );

    Ok(Collections {
        orders: MongoStore::new(&database, orders),
        feedbacks: MongoStore::new(&database, feedbacks),
    })
}

fn required<'a>(value: Option<&'a str>, key: &str) -> Result<&'a str, RepositoryError> {
    value.ok_or_else(|| RepositoryError::Configuration(format!("{key} is not set")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_requires_url() {
        let config = StoreConfig {
            database: Some("kohinoor".to_string()),
            orders_collection: Some("orders".to_string()),
            feedbacks_collection: Some("feedbacks".to_string()),
            ..StoreConfig::default()
        };

        let result = connect(&config).await;
        assert!(matches!(
            result,
            Err(RepositoryError::Configuration(ref msg)) if msg.contains("MONGODB_URL")
        ));
    }

    #[tokio::test]
    async fn test_connect_requires_collection_names() {
        let config = StoreConfig {
            url: Some("mongodb://localhost:27017".to_string().into()),
            database: Some("kohinoor".to_string()),
            orders_collection: Some("orders".to_string()),
            feedbacks_collection: None,
        };

        let result = connect(&config).await;
        assert!(matches!(
            result,
            Err(RepositoryError::Configuration(ref msg)) if msg.contains("COLLECTION_NAME02")
        ));
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let config = StoreConfig {
            url: Some("not-a-mongodb-url".to_string().into()),
            database: Some("kohinoor".to_string()),
            orders_collection: Some("orders".to_string()),
            feedbacks_collection: Some("feedbacks".to_string()),
        };

        assert!(matches!(
            connect(&config).await,
            Err(RepositoryError::Database(_))
        ));
    }
}
