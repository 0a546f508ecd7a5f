use crate::Submission;

/// Plain-text message announcing a new submission to the site owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: String,
    pub subject: String,
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub body: String,
}

impl Notification {
    pub fn compose(
        submission: &Submission,
        recipient: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        let body = format!(
            "Имя: {}\nТелефон: {}\nEmail: {}\n\nСообщение:\n{}\n",
            submission.name, submission.phone, submission.email, submission.message
        );

        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            from_name: submission.name.to_owned(),
            from_email: submission.email.to_owned(),
            reply_to: submission.email.to_owned(),
            body,
        }
    }
}
