//! Services used by the route handlers.
//!
//! # Services
//!
//! - `email` - Order confirmations and owner notifications over SMTP

pub mod email;

pub use email::{Mailer, MailError, OutgoingEmail, SmtpMailer};
