//! Stand-ins for the e-mail and message queue integrations. Both only log.

use async_trait::async_trait;

use crate::domain::ports::outbound::{EmailNotifier, EventPublisher};

#[derive(Debug, Default, Clone)]
pub struct LoggingEmailNotifier;

#[async_trait]
impl EmailNotifier for LoggingEmailNotifier {
    async fn send(&self, to: &str, subject: &str, content: &str) {
        tracing::info!(%to, %subject, %content, "dummy email sent");
    }
}

#[derive(Debug, Default, Clone)]
pub struct LoggingEventPublisher;

#[async_trait]
impl EventPublisher for LoggingEventPublisher {
    async fn publish(&self, queue: &str, message: serde_json::Value) {
        tracing::info!(%queue, %message, "dummy event published");
    }
}
