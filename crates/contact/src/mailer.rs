use crate::Notification;

/// Delivers composed notifications. Implementations make a single attempt.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, notification: &Notification) -> anyhow::Result<()>;
}
