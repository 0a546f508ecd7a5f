use std::sync::Arc;

use validator::Validate;

use crate::{Error, Mailer, Notification, Result, SubmitFormInput};

/// Handles contact form submissions for one fixed recipient.
#[derive(Clone)]
pub struct Command {
    mailer: Arc<dyn Mailer>,
    recipient: String,
    subject: String,
}

impl Command {
    pub fn new(
        mailer: Arc<dyn Mailer>,
        recipient: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            recipient: recipient.into(),
            subject: subject.into(),
        }
    }

    /// Sanitizes, validates and dispatches one submission.
    ///
    /// Each call dispatches on its own; repeated identical submissions are not
    /// deduplicated.
    #[tracing::instrument(skip_all, fields(recipient = %self.recipient))]
    pub async fn submit_form(&self, input: &SubmitFormInput) -> Result<()> {
        let submission = input.sanitize();

        if let Err(errors) = submission.validate() {
            tracing::info!(
                fields = ?errors.field_errors().keys().collect::<Vec<_>>(),
                "Submission rejected"
            );

            return Err(errors.into());
        }

        let notification = Notification::compose(&submission, &self.recipient, &self.subject);

        self.mailer
            .send(&notification)
            .await
            .map_err(Error::Dispatch)?;

        tracing::info!(from = %notification.from_email, "Contact notification dispatched");

        Ok(())
    }
}
