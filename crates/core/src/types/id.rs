//! Store-assigned document identifiers.
//!
//! The document store generates an identifier on insert. Clients only ever
//! see it as text, so it is carried as a string from the persistence layer
//! outwards.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier assigned by the document store on insert.
///
/// ## Examples
///
/// ```
/// use kohinoor_core::DocumentId;
///
/// let id = DocumentId::new("65f1c0ffee0000000000abcd");
/// assert_eq!(id.as_str(), "65f1c0ffee0000000000abcd");
/// assert_eq!(id.to_string(), "65f1c0ffee0000000000abcd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wrap an identifier rendered by the store.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `DocumentId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A persisted document together with its identifier.
///
/// Serializes flat, with the identifier under `_id`:
///
/// ```
/// use kohinoor_core::{DocumentId, Feedback, Stored};
///
/// let stored = Stored {
///     id: DocumentId::new("abc"),
///     document: Feedback {
///         name: "Asha".to_string(),
///         phone: "555".to_string(),
///         feedback: "Great crust".to_string(),
///     },
/// };
///
/// let json = serde_json::to_value(&stored).unwrap();
/// assert_eq!(json["_id"], "abc");
/// assert_eq!(json["name"], "Asha");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// The document as it was submitted.
    #[serde(flatten)]
    pub document: T,
}

/// A document read back from the store, field for field.
///
/// Listings return whatever each stored document holds, including fields
/// older or hand-edited records carry that the submission types do not.
pub type RawDocument = Map<String, Value>;
