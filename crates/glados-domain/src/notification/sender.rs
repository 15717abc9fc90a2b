use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// Title and body of one push
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub title: String,
    /// Report body before template-specific conversion
    pub content: String,
}

impl NotificationMessage {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Delivers a message through one push channel
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// A single attempt; callers decide what a failure means
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError>;
}
