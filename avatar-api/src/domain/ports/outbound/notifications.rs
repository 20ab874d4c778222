use async_trait::async_trait;

/// Outgoing e-mail. Delivery is best-effort and never reports failure.
#[async_trait]
pub trait EmailNotifier: Send + Sync + 'static {
    async fn send(&self, to: &str, subject: &str, content: &str);
}

/// Message queue publishing, fire-and-forget.
#[async_trait]
pub trait EventPublisher: Send + Sync + 'static {
    async fn publish(&self, queue: &str, message: serde_json::Value);
}
