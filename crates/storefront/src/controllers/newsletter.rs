//! Newsletter sign-up.
//!
//! Sign-ups are not sent anywhere; a fixed delay stands in for the request.

use std::time::Duration;

use rooftop_core::{Email, EmailError};
use thiserror::Error;
use tracing::instrument;

/// Newsletter failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NewsletterError {
    /// The address did not validate.
    #[error("Mohon masukkan email yang valid.")]
    InvalidEmail(#[source] EmailError),
}

/// A completed sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub email: Email,
    /// Confirmation shown to the visitor.
    pub message: String,
}

/// Handles newsletter form submissions.
#[derive(Debug, Clone, Copy)]
pub struct Newsletter {
    delay: Duration,
}

impl Newsletter {
    /// `delay` is how long a submission pretends to take.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Validate `input` and, after the simulated delay, confirm the sign-up.
    ///
    /// # Errors
    ///
    /// Returns [`NewsletterError::InvalidEmail`] for an invalid address; no
    /// delay is spent in that case.
    #[instrument(skip(self))]
    pub async fn subscribe(&self, input: &str) -> Result<Subscription, NewsletterError> {
        let email = Email::parse(input.trim()).map_err(NewsletterError::InvalidEmail)?;

        tokio::time::sleep(self.delay).await;

        tracing::info!(domain = %email.domain(), "Newsletter subscription recorded");
        Ok(Subscription {
            message: format!("Terima kasih! Email {email} telah terdaftar di newsletter kami."),
            email,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_valid_subscription() {
        let newsletter = Newsletter::new(Duration::ZERO);
        let subscription = newsletter.subscribe(" kopi@rooftop.id ").await.unwrap();
        assert_eq!(subscription.email.as_str(), "kopi@rooftop.id");
        assert_eq!(
            subscription.message,
            "Terima kasih! Email kopi@rooftop.id telah terdaftar di newsletter kami."
        );
    }

    #[tokio::test]
    async fn test_invalid_email() {
        let newsletter = Newsletter::new(Duration::from_secs(60));
        let err = newsletter.subscribe("kopi@rooftop").await.unwrap_err();
        assert_eq!(err.to_string(), "Mohon masukkan email yang valid.");
        assert!(newsletter.subscribe("").await.is_err());
    }
}
