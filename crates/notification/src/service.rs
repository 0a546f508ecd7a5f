//! Email notification service using lettre

use homeservice_contact::{Mailer, Notification};
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmailTransport {
    /// Deliver through the configured SMTP server
    #[default]
    Smtp,
    /// Log the message and skip delivery
    Log,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub transport: EmailTransport,
    pub smtp_host: String,
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    skip_sending: bool,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        if config.transport == EmailTransport::Log {
            return Self::new_mock(config);
        }

        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "Email service initialized with authentication and TLS"
            );

            // relay() negotiates STARTTLS
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            skip_sending: false,
        })
    }

    /// Create an email service that logs messages instead of sending them
    pub fn new_mock(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = SmtpTransport::builder_dangerous(&config.smtp_host)
            .port(config.smtp_port)
            .build();

        tracing::info!("Mock email service initialized (SMTP calls skipped)");

        Ok(Self {
            mailer,
            skip_sending: true,
        })
    }

    /// Build the plain-text message for a notification.
    ///
    /// `From` carries the submitter's name and address so replies reach them
    /// directly; `Reply-To` repeats the address for clients that ignore `From`.
    pub fn build_message(notification: &Notification) -> anyhow::Result<Message> {
        let from = Mailbox::new(
            Some(notification.from_name.to_owned()),
            notification.from_email.parse()?,
        );

        let message = Message::builder()
            .from(from)
            .reply_to(notification.reply_to.parse()?)
            .to(notification.recipient.parse()?)
            .subject(notification.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.to_owned())?;

        Ok(message)
    }
}

#[async_trait::async_trait]
impl Mailer for EmailService {
    #[tracing::instrument(skip_all, fields(to = %notification.recipient))]
    async fn send(&self, notification: &Notification) -> anyhow::Result<()> {
        let message = Self::build_message(notification)?;

        if self.skip_sending {
            tracing::info!(
                subject = %notification.subject,
                body = %notification.body,
                "Mock email service: Skipping actual SMTP send"
            );

            return Ok(());
        }

        tracing::info!("Sending email text plain");

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}
