//! Order submissions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An order placed through the storefront checkout.
///
/// Field names match the storefront's JSON (`firstName`, `whatsappNumber`, ...)
/// and are persisted under the same names. Every field is required; beyond
/// presence and type nothing is validated here. Cart entries are opaque and
/// stored exactly as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub whatsapp_number: String,
    /// Customer contact address; receives the order confirmation.
    pub email: String,
    pub cart: Vec<Value>,
    pub total: f64,
}
