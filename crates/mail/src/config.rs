//! SMTP configuration.

/// Default SMTP host; the contact relay is usually a Gmail account.
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Configuration for the SMTP relay.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    /// Address used in the `From` header.
    pub from_address: String,
    /// Where contact-form messages are delivered.
    pub contact_to: String,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` when no recipient can be determined, signalling that
    /// the contact relay is not configured.
    ///
    /// | Variable        | Required | Default                  |
    /// |-----------------|----------|--------------------------|
    /// | `SMTP_HOST`     | no       | `smtp.gmail.com`         |
    /// | `SMTP_PORT`     | no       | `587`                    |
    /// | `SMTP_USER`     | no       | unset                    |
    /// | `SMTP_PASSWORD` | no       | unset                    |
    /// | `SMTP_FROM`     | no       | `SMTP_USER`              |
    /// | `CONTACT_TO`    | no       | `SMTP_USER`              |
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let smtp_user = lookup("SMTP_USER").filter(|v| !v.is_empty());
        let contact_to = lookup("CONTACT_TO")
            .filter(|v| !v.is_empty())
            .or_else(|| smtp_user.clone())?;
        let from_address = lookup("SMTP_FROM")
            .filter(|v| !v.is_empty())
            .or_else(|| smtp_user.clone())
            .unwrap_or_else(|| contact_to.clone());

        Some(Self {
            smtp_host: lookup("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: lookup("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_password: lookup("SMTP_PASSWORD"),
            smtp_user,
            from_address,
            contact_to,
        })
    }
}
