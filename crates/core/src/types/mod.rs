//! Core types for Kohinoor.
//!
//! Submissions arrive from the storefront as JSON, are persisted verbatim,
//! and come back out of the store tagged with their identifier.

pub mod feedback;
pub mod id;
pub mod order;

pub use feedback::Feedback;
pub use id::{DocumentId, RawDocument, Stored};
pub use order::Order;
