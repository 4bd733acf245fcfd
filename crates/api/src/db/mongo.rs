//! MongoDB-backed [`DocumentStore`].

use std::marker::PhantomData;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Bson, Document, doc};
use mongodb::{Collection, Database};
use serde::Serialize;

use kohinoor_core::{DocumentId, RawDocument, Stored};

use super::{DocumentStore, RepositoryError};

/// A MongoDB collection holding documents of type `T`.
pub struct MongoStore<T> {
    collection: Collection<Document>,
    _document: PhantomData<fn() -> T>,
}

impl<T> MongoStore<T> {
    /// Open the named collection in `database`.
    #[must_use]
    pub fn new(database: &Database, name: &str) -> Self {
        Self {
            collection: database.collection(name),
            _document: PhantomData,
        }
    }
}

#[async_trait]
impl<T> DocumentStore<T> for MongoStore<T>
where
    T: Serialize + Send + Sync,
{
    async fn insert(&self, document: &T) -> Result<DocumentId, RepositoryError> {
        let document = bson::to_document(document)?;
        let result = self.collection.insert_one(document).await?;

        render_id(result.inserted_id).ok_or(RepositoryError::MissingId)
    }

    async fn list_all(&self) -> Result<Vec<Stored<RawDocument>>, RepositoryError> {
        let mut cursor = self.collection.find(doc! {}).await?;
        let mut documents = Vec::new();

        while let Some(raw) = cursor.try_next().await? {
            let stored = into_listing(raw).ok_or_else(|| {
                RepositoryError::DataCorruption(format!(
                    "document without _id in {}",
                    self.collection.name()
                ))
            })?;
            documents.push(stored);
        }

        tracing::debug!(
            collection = %self.collection.name(),
            count = documents.len(),
            "Listed documents"
        );
        Ok(documents)
    }
}

/// Split a stored document into its text `_id` and the remaining fields as
/// JSON. Returns `None` when the document has no usable `_id`.
fn into_listing(mut raw: Document) -> Option<Stored<RawDocument>> {
    let id = raw.remove("_id").and_then(render_id)?;
    let document = raw
        .into_iter()
        .map(|(key, value)| (key, value.into_relaxed_extjson()))
        .collect();

    Some(Stored { id, document })
}

/// Render a BSON `_id` as text. Object ids become their 24-character hex form.
fn render_id(id: Bson) -> Option<DocumentId> {
    match id {
        Bson::Null | Bson::Undefined => None,
        Bson::ObjectId(oid) => Some(DocumentId::new(oid.to_hex())),
        Bson::String(s) => Some(DocumentId::new(s)),
        other => Some(DocumentId::new(other.to_string())),
    }
}
