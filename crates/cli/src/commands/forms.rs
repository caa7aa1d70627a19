//! Newsletter and contact form commands.
//!
//! Both wait out the configured simulated delay
//! (`ROOFTOP_NEWSLETTER_DELAY_MS`, `ROOFTOP_CONTACT_DELAY_MS`).

use rooftop_storefront::controllers::contact::ContactError;
use rooftop_storefront::controllers::{ContactForm, ContactSubmission, Newsletter};
use rooftop_storefront::error::Result;
use rooftop_storefront::toast::Toast;

use super::{Context, print_toast};

/// Subscribe `email` to the newsletter.
///
/// # Errors
///
/// Returns an error if the address is invalid.
pub async fn newsletter(ctx: &Context, email: &str) -> Result<()> {
    let subscription = Newsletter::new(ctx.config.newsletter_delay)
        .subscribe(email)
        .await?;
    print_toast(&Toast::success(subscription.message));
    Ok(())
}

/// Send the contact form, printing every invalid field.
///
/// # Errors
///
/// Returns an error if any field fails validation.
pub async fn contact(ctx: &Context, submission: &ContactSubmission) -> Result<()> {
    match ContactForm::new(ctx.config.contact_delay)
        .submit(submission)
        .await
    {
        Ok(message) => {
            print_toast(&Toast::success(message));
            Ok(())
        }
        Err(ContactError::Invalid(errors)) => {
            for error in &errors {
                println!("{}: {}", error.field.id(), error.message);
            }
            Err(ContactError::Invalid(errors).into())
        }
    }
}
