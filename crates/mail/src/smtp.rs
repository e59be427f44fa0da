//! `lettre`-backed [`Mailer`].

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::{MailConfig, MailError, Mailer, OutgoingMessage};

/// Sends mail through an authenticated STARTTLS relay.
///
/// The transport is built once and reused; `lettre` pools connections
/// internally.
pub struct SmtpMailer {
    from_address: lettre::Address,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let from_address: lettre::Address = config.from_address.parse()?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            from_address,
            transport: builder.build(),
        })
    }

    fn build(&self, message: &OutgoingMessage) -> Result<Message, MailError> {
        let from = Mailbox::new(Some(message.from_display.clone()), self.from_address.clone());

        let builder = Message::builder()
            .from(from)
            .reply_to(message.reply_to.parse()?)
            .to(message.to.parse()?)
            .subject(message.subject.clone());

        let built = match &message.body_html {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(
                message.body_text.clone(),
                html.clone(),
            )),
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(message.body_text.clone()),
        };
        built.map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &OutgoingMessage) -> Result<(), MailError> {
        let email = self.build(message)?;
        self.transport.send(email).await?;
        tracing::info!(to = %message.to, subject = %message.subject, "Contact email sent");
        Ok(())
    }
}
