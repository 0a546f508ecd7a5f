#![allow(dead_code)]

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use axum::Router;
use homeservice::{
    AppState,
    config::{Config, ContactConfig, LoggingConfig, ServerConfig, SiteConfig},
};
use homeservice_contact::{Mailer, Notification};
use homeservice_notification::{EmailConfig, EmailTransport};

pub const RECIPIENT: &str = "owner@homeservice.localhost";

pub const BOUNDARY: &str = "XBOUNDARY";

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, notification: &Notification) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(notification.clone());

        Ok(())
    }
}

pub struct FailingMailer;

#[async_trait::async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _notification: &Notification) -> anyhow::Result<()> {
        anyhow::bail!("smtp connection refused")
    }
}

pub fn test_config(site_root: &Path, locale: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        email: EmailConfig {
            transport: EmailTransport::Log,
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
        },
        contact: ContactConfig {
            recipient: RECIPIENT.to_string(),
            subject: "Новая заявка с сайта Home Service Rostov".to_string(),
            locale: locale.to_string(),
        },
        site: SiteConfig {
            root: site_root.to_path_buf(),
        },
        logging: LoggingConfig::default(),
    }
}

pub fn create_test_app(mailer: Arc<dyn Mailer>, site_root: &Path) -> Router {
    create_test_app_with_locale(mailer, site_root, "ru")
}

pub fn create_test_app_with_locale(
    mailer: Arc<dyn Mailer>,
    site_root: &Path,
    locale: &str,
) -> Router {
    let config = test_config(site_root, locale);
    let contact_command = homeservice_contact::Command::new(
        mailer,
        config.contact.recipient.to_owned(),
        config.contact.subject.to_owned(),
    );

    homeservice::router(AppState {
        config: Arc::new(config),
        contact_command,
    })
}

pub fn form_body(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).unwrap()
}

pub fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ivan"),
        ("phone", "+7 999 123-45-67"),
        ("email", "a@b.com"),
        ("message", "Hello there, need service"),
    ]
}

/// `multipart/form-data` body delimited by [`BOUNDARY`], as a browser sends
/// for `new FormData(form)`.
pub fn multipart_body(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();

    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    body
}
