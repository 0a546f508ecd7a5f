use std::sync::{Arc, Mutex};

use homeservice_contact::{Command, Mailer, Notification, SubmitFormInput};

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<Notification>>,
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

pub fn setup_command() -> (Command, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::default());
    let command = Command::new(mailer.clone(), "owner@homeservice.localhost", "New request");

    (command, mailer)
}

#[allow(dead_code)]
pub fn valid_input() -> SubmitFormInput {
    SubmitFormInput {
        name: "Ivan".to_owned(),
        phone: "+7 999 123-45-67".to_owned(),
        email: "a@b.com".to_owned(),
        message: "Hello there, need service".to_owned(),
    }
}
