//! Contact form validation and (simulated) submission.

use std::time::Duration;

use rooftop_core::Email;
use thiserror::Error;
use tracing::instrument;

/// Confirmation shown after a successful submission.
pub const SENT_MESSAGE: &str = "✅ Pesan berhasil dikirim! Kami akan menghubungi Anda segera.";

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Every field, in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Element id of the input.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "contact-name",
            Self::Email => "contact-email",
            Self::Subject => "contact-subject",
            Self::Message => "contact-message",
        }
    }

    /// Inline message shown under an invalid input.
    #[must_use]
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Nama minimal 3 karakter",
            Self::Email => "Email tidak valid",
            Self::Subject => "Subjek minimal 5 karakter",
            Self::Message => "Pesan minimal 10 karakter",
        }
    }

    /// Minimum length in characters; `None` for the email field.
    #[must_use]
    pub const fn min_chars(self) -> Option<usize> {
        match self {
            Self::Name => Some(3),
            Self::Email => None,
            Self::Subject => Some(5),
            Self::Message => Some(10),
        }
    }

    /// Look a field up by element id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }
}

/// One invalid field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

impl From<ContactField> for FieldError {
    fn from(field: ContactField) -> Self {
        Self {
            field,
            message: field.error_message(),
        }
    }
}

/// Contact form failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// One or more fields did not validate.
    #[error("contact form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),
}

/// Values entered in the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Value of `field`.
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }
}

/// Validates and submits the contact form.
#[derive(Debug, Clone, Copy)]
pub struct ContactForm {
    delay: Duration,
}

impl ContactForm {
    /// `delay` is how long a submission pretends to take.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Validate a single field, as on blur. Values are trimmed first and
    /// lengths count characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldError`] to display under the input.
    pub fn validate_field(field: ContactField, value: &str) -> Result<(), FieldError> {
        let value = value.trim();
        let valid = match field.min_chars() {
            Some(min) => value.chars().count() >= min,
            None => Email::is_valid(value),
        };
        if valid { Ok(()) } else { Err(field.into()) }
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns every failing field, in form order.
    pub fn validate(submission: &ContactSubmission) -> Result<(), ContactError> {
        let errors: Vec<FieldError> = ContactField::ALL
            .into_iter()
            .filter_map(|field| Self::validate_field(field, submission.value(field)).err())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ContactError::Invalid(errors))
        }
    }

    /// Validate, wait out the simulated delay, and return the confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Invalid`] without waiting if any field fails.
    #[instrument(skip(self, submission), fields(email = %submission.email))]
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<&'static str, ContactError> {
        Self::validate(submission)?;

        tokio::time::sleep(self.delay).await;

        tracing::info!(subject = %submission.subject.trim(), "Contact message accepted");
        Ok(SENT_MESSAGE)
    }
}
