//! Email service for order confirmations and owner notifications.
//!
//! Uses SMTP via lettre for delivery with Askama plain-text templates.
//! Every send opens its own STARTTLS session, authenticates as the sender
//! account, transmits one message and closes. Nothing is retried.

use askama::Template;
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use kohinoor_core::Order;

use crate::config::MailConfig;

/// Subject of the customer confirmation.
pub const ORDER_CONFIRMATION_SUBJECT: &str = "Order Confirmation";

/// Subject of the owner notification.
pub const OWNER_NOTIFICATION_SUBJECT: &str = "New Order";

/// Plain text template for the customer's order confirmation.
#[derive(Template)]
#[template(path = "email/order_confirmation.txt")]
struct OrderConfirmationText<'a> {
    name: &'a str,
    signature: &'a str,
}

/// Plain text template for the owner notification.
#[derive(Template)]
#[template(path = "email/owner_notification.txt")]
struct OwnerNotificationText<'a> {
    signature: &'a str,
}

/// Errors that can occur when composing or sending email.
#[derive(Debug, Error)]
pub enum MailError {
    /// SMTP transport error (connection, TLS, authentication, rejection).
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// A mail setting needed for this send is missing.
    #[error("Mail not configured: {0} is not set")]
    NotConfigured(&'static str),
}

/// A single plain-text message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivers outgoing mail.
///
/// `Ok(())` means the relay accepted the message; any failure comes back as
/// a [`MailError`] for the caller to map.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one message.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Mailer that relays through an authenticated SMTP server.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    config: MailConfig,
}

impl SmtpMailer {
    /// Create a new SMTP mailer from configuration.
    ///
    /// Credentials are not checked here; a missing sender or password fails
    /// the first send.
    #[must_use]
    pub const fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// Build the From mailbox and a one-shot transport for a single send.
    fn transport(&self) -> Result<(Mailbox, AsyncSmtpTransport<Tokio1Executor>), MailError> {
        let sender = self
            .config
            .sender
            .as_deref()
            .ok_or(MailError::NotConfigured("SENDER_GMAIL"))?;
        let password = self
            .config
            .app_password
            .as_ref()
            .ok_or(MailError::NotConfigured("APP_PASSWORD"))?;

        let from = parse_mailbox(sender)?;
        let credentials = Credentials::new(sender.to_string(), password.expose_secret().to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
            .port(self.config.smtp_port)
            .credentials(credentials)
            .build();

        Ok((from, transport))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let (from, transport) = self.transport()?;
        let message = build_message(from, email)?;

        transport.send(message).await?;

        tracing::info!(to = %email.to, subject = %email.subject, "Email sent successfully");
        Ok(())
    }
}

/// Compose the confirmation sent to the customer who placed `order`.
///
/// # Errors
///
/// Returns error if the template fails to render.
pub fn order_confirmation(order: &Order, signature: &str) -> Result<OutgoingEmail, MailError> {
    let body = OrderConfirmationText {
        name: &order.last_name,
        signature,
    }
    .render()?;

    Ok(OutgoingEmail {
        to: order.email.clone(),
        subject: ORDER_CONFIRMATION_SUBJECT.to_string(),
        body,
    })
}

/// Compose the notification sent to the shop owner.
///
/// # Errors
///
/// Returns `MailError::NotConfigured` if no owner address is set, or an error
/// if the template fails to render.
pub fn owner_notification(owner: Option<&str>, signature: &str) -> Result<OutgoingEmail, MailError> {
    let owner = owner.ok_or(MailError::NotConfigured("OWNER_GMAIL"))?;
    let body = OwnerNotificationText { signature }.render()?;

    Ok(OutgoingEmail {
        to: owner.to_string(),
        subject: OWNER_NOTIFICATION_SUBJECT.to_string(),
        body,
    })
}

/// Build a plain-text message.
fn build_message(from: Mailbox, email: &OutgoingEmail) -> Result<Message, MailError> {
    let message = Message::builder()
        .from(from)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())?;

    Ok(message)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .trim()
        .parse()
        .map_err(|_| MailError::InvalidAddress(address.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use serde_json::json;

    use super::*;

    fn order(last_name: &str, email: &str) -> Order {
        serde_json::from_value(json!({
            "firstName": "Asha",
            "lastName": last_name,
            "address": "12 Mall Road",
            "city": "Lahore",
            "whatsappNumber": "+92 300 0000000",
            "email": email,
            "cart": [],
            "total": 0.0
        }))
        .unwrap()
    }

    fn mail_config() -> MailConfig {
        MailConfig {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            sender: Some("shop@example.com".to_string()),
            app_password: Some(SecretString::from("abcd efgh ijkl mnop")),
            owner: Some("owner@example.com".to_string()),
            receiver: None,
            signature: "Kohinoor Toppings".to_string(),
        }
    }

    #[test]
    fn test_order_confirmation_content() {
        let email = order_confirmation(&order("Khan", "asha@example.com"), "Kohinoor Toppings")
            .unwrap();

        assert_eq!(email.to, "asha@example.com");
        assert_eq!(email.subject, "Order Confirmation");
        assert_eq!(
            email.body.trim_end(),
            "Hello, Khan 👋 \n\nYour order has been placed successfully 🎉.\n\n\
             Our team will contact you within 24 hours 🛃\n\nThanks,\nKohinoor Toppings"
        );
    }

    #[test]
    fn test_order_confirmation_does_not_escape_names() {
        let email = order_confirmation(&order("O'Brien <Jr>", "a@example.com"), "Shop").unwrap();
        assert!(email.body.starts_with("Hello, O'Brien <Jr> 👋"));
    }

    #[test]
    fn test_owner_notification_content() {
        let email = owner_notification(Some("owner@example.com"), "Kohinoor Toppings").unwrap();

        assert_eq!(email.to, "owner@example.com");
        assert_eq!(email.subject, "New Order");
        assert_eq!(
            email.body.trim_end(),
            "Hey👋,\n\nNew order has been placed.\n\nGo and confirm it quickly.\n\nThanks,\nKohinoor Toppings"
        );
    }

    #[test]
    fn test_owner_notification_requires_owner() {
        let err = owner_notification(None, "Shop").unwrap_err();
        assert!(matches!(err, MailError::NotConfigured("OWNER_GMAIL")));
    }

    #[test]
    fn test_build_message_headers() {
        let email = owner_notification(Some("owner@example.com"), "Shop").unwrap();
        let from = parse_mailbox("shop@example.com").unwrap();

        let formatted = String::from_utf8(build_message(from, &email).unwrap().formatted()).unwrap();

        assert!(formatted.contains("From: shop@example.com"));
        assert!(formatted.contains("To: owner@example.com"));
        assert!(formatted.contains("Subject: New Order"));
        assert!(formatted.contains("Content-Type: text/plain"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let email = order_confirmation(&order("Khan", "not an address"), "Shop").unwrap();
        let from = parse_mailbox("shop@example.com").unwrap();

        assert!(matches!(
            build_message(from, &email),
            Err(MailError::InvalidAddress(_))
        ));
    }

    #[tokio::test]
    async fn test_send_without_sender_fails_before_connecting() {
        let mailer = SmtpMailer::new(MailConfig {
            sender: None,
            ..mail_config()
        });
        let email = owner_notification(Some("owner@example.com"), "Shop").unwrap();

        let err = mailer.send(&email).await.unwrap_err();
        assert!(matches!(err, MailError::NotConfigured("SENDER_GMAIL")));
    }

    #[tokio::test]
    async fn test_send_without_password_fails_before_connecting() {
        let mailer = SmtpMailer::new(MailConfig {
            app_password: None,
            ..mail_config()
        });
        let email = owner_notification(Some("owner@example.com"), "Shop").unwrap();

        let err = mailer.send(&email).await.unwrap_err();
        assert!(matches!(err, MailError::NotConfigured("APP_PASSWORD")));
    }

    #[tokio::test]
    async fn test_transport_builds_from_config() {
        let mailer = SmtpMailer::new(mail_config());
        let (from, _transport) = mailer.transport().unwrap();
        assert_eq!(from.email.to_string(), "shop@example.com");
    }
}
