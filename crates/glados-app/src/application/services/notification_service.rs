use log::{error, info};
use std::sync::Arc;

use glados_domain::notification::{NotificationMessage, NotificationSender};

/// Best-effort delivery of the run report.
/// Failures are logged and never reach the caller.
#[derive(Clone, Default)]
pub struct NotificationService {
    sender: Option<Arc<dyn NotificationSender>>,
}

impl NotificationService {
    pub fn new(sender: Option<Arc<dyn NotificationSender>>) -> Self {
        Self { sender }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    pub async fn notify(&self, message: &NotificationMessage) {
        let Some(sender) = &self.sender else {
            info!("No push token configured, skipping notification");
            return;
        };

        match sender.send(message).await {
            Ok(()) => info!("Notification sent: {}", message.title),
            Err(e) => error!("Failed to send notification: {}", e.format_with_code()),
        }
    }
}
