//! Contact form validation and submission state machine.
//!
//! DESIGN
//! ======
//! `Idle -> (validate) -> Invalid | Submitting -> Sent | Failed`.
//! Validation is synchronous, so it has no resting state of its own.
//!
//! Each accepted submit issues a [`SubmitTicket`]. Completions carry their
//! ticket back and are applied only if it still matches the in-flight one, so
//! a completion that arrives after teardown (or after `abandon`) is dropped
//! instead of clearing a form nobody is looking at.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use serde::{Deserialize, Serialize};

/// Minimum trimmed message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// The four form fields. Values are always defined, possibly empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Apply the validation rules in order; the first failure wins.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] the fields violate.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::EmailInvalid);
        }
        if self.subject.trim().is_empty() {
            return Err(ValidationError::SubjectRequired);
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ValidationError::MessageRequired);
        }
        if message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ValidationError::MessageTooShort);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    EmailInvalid,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Transport failure reported by a submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SubmitError(pub String);

impl Default for SubmitError {
    fn default() -> Self {
        Self("Failed to send message. Please try again.".to_owned())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Invalid(ValidationError),
    Submitting,
    Sent,
    Failed(SubmitError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmitTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected(ValidationError),
    /// Validation passed; the caller must send the message and report back
    /// with the ticket.
    Started(SubmitTicket, ContactMessage),
    /// A submission is already in flight.
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactMessage,
    status: FormStatus,
    in_flight: Option<SubmitTicket>,
    next_ticket: u64,
}

impl ContactForm {
    #[must_use]
    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    /// Update one field. Edits are ignored while a submission is in flight.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        if self.is_submitting() {
            return;
        }
        *self.fields.slot(field) = value;
    }

    #[must_use]
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Ignored;
        }
        if let Err(e) = self.fields.validate() {
            self.status = FormStatus::Invalid(e);
            return SubmitOutcome::Rejected(e);
        }

        let ticket = SubmitTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.status = FormStatus::Submitting;
        SubmitOutcome::Started(ticket, self.fields.clone())
    }

    /// Apply a submission result. Returns `false` if the ticket is stale.
    pub fn complete(&mut self, ticket: SubmitTicket, result: Result<(), SubmitError>) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        match result {
            Ok(()) => {
                self.fields = ContactMessage::default();
                self.status = FormStatus::Sent;
            }
            Err(e) => self.status = FormStatus::Failed(e),
        }
        true
    }

    /// Forget the in-flight submission so its completion is discarded.
    pub fn abandon(&mut self) {
        if self.in_flight.take().is_some() {
            self.status = FormStatus::Idle;
        }
    }

    /// Banner text under the form, if any.
    #[must_use]
    pub fn status_message(&self) -> Option<String> {
        match &self.status {
            FormStatus::Idle | FormStatus::Submitting => None,
            FormStatus::Invalid(e) => Some(format!("Error: {e}")),
            FormStatus::Failed(e) => Some(format!("Error: {e}")),
            FormStatus::Sent => Some(SENT_MESSAGE.to_owned()),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.status, FormStatus::Invalid(_) | FormStatus::Failed(_))
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
