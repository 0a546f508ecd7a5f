use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::sanitize::{sanitize_email, sanitize_text};

/// Contact form fields exactly as they were posted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitFormInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl SubmitFormInput {
    pub fn sanitize(&self) -> Submission {
        Submission {
            name: sanitize_text(&self.name),
            phone: sanitize_text(&self.phone),
            email: sanitize_email(&self.email),
            message: sanitize_text(&self.message),
        }
    }
}

/// A sanitized contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Submission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(email, custom(function = "dotted_domain"))]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

/// The domain part needs at least two non-empty labels (`domain.tld`).
fn dotted_domain(email: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Err(ValidationError::new("email_domain"));
    };

    let mut labels = domain.split('.');
    let dotted = domain.contains('.') && labels.all(|label| !label.is_empty());

    if dotted {
        Ok(())
    } else {
        Err(ValidationError::new("email_domain"))
    }
}
