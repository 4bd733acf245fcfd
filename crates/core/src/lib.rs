//! Kohinoor Core - Shared types library.
//!
//! This crate provides the domain types used by the Kohinoor backend:
//! - `api` - HTTP service that accepts orders and feedback from the storefront
//! - `integration-tests` - In-process router tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no mail transport. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Order and feedback submissions, store-assigned identifiers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
