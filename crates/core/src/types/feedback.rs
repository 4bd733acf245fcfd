//! Customer feedback submissions.

use serde::{Deserialize, Serialize};

/// Feedback left through the storefront contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub name: String,
    pub phone: String,
    pub feedback: String,
}
