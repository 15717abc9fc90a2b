use std::sync::Arc;
use std::time::Duration;

use glados_domain::notification::{NotificationSender, PushChannelConfig};

use super::pushplus::PushPlusSender;
use crate::http::HttpTransport;

/// Create the push sender for the configured channel.
///
/// Returns `None` when no token is configured; pushing is then a no-op.
pub fn create_sender(
    config: &PushChannelConfig,
    transport: Arc<dyn HttpTransport>,
    timeout: Duration,
) -> Option<Arc<dyn NotificationSender>> {
    if !config.is_enabled() {
        return None;
    }

    Some(Arc::new(PushPlusSender::new(
        config.token.clone(),
        config.template,
        transport,
        timeout,
    )))
}
