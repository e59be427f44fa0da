//! Contact-form email relay.
//!
//! - [`MailConfig`]: SMTP settings loaded once at startup.
//! - [`Mailer`]: the send seam; [`SmtpMailer`] is the `lettre` implementation.
//! - [`ContactSubmission`]: turns a contact form into an [`OutgoingMessage`].

pub mod config;
pub mod contact;
pub mod smtp;

use async_trait::async_trait;

pub use config::MailConfig;
pub use contact::ContactSubmission;
pub use smtp::SmtpMailer;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// A sender, reply-to, or recipient address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// Message + trait
// ---------------------------------------------------------------------------

/// A single fully composed email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Display name shown in the `From` header; the address is the account's.
    pub from_display: String,
    pub reply_to: String,
    pub to: String,
    pub subject: String,
    pub body_text: String,
    pub body_html: Option<String>,
}

/// Sends one message per call. No retries; callers decide how to report
/// failures.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &OutgoingMessage) -> Result<(), MailError>;
}
