//! Contact-form composition.

use serde::Deserialize;

use crate::OutgoingMessage;

/// Body of `POST /send`. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Subject line, falling back to one naming the sender.
    pub fn subject_line(&self) -> String {
        match self.subject.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => format!("New message from {}", self.name),
        }
    }

    /// Build the email delivered to the site owner at `to`.
    ///
    /// Replies go straight back to the visitor.
    pub fn compose(&self, to: &str) -> OutgoingMessage {
        let subject = self.subject_line();

        let body_text = format!(
            "Name: {}\nEmail: {}\nSubject: {}\n\n{}",
            self.name, self.email, subject, self.message
        );

        let body_html = format!(
            "<h3>New contact form submission</h3>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Subject:</strong> {}</p>\
             <p>{}</p>",
            escape_html(&self.name),
            escape_html(&self.email),
            escape_html(&subject),
            // Line breaks are inserted after escaping so the tags survive.
            escape_html(&self.message).replace('\n', "<br>"),
        );

        OutgoingMessage {
            from_display: format!("{} (Portfolio Contact)", self.name),
            reply_to: self.email.clone(),
            to: to.to_string(),
            subject,
            body_text,
            body_html: Some(body_html),
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
