mod message_builder;
mod sender;

use std::sync::Arc;
use std::time::Duration;

use glados_domain::notification::PushTemplate;

use crate::http::HttpTransport;

pub const PUSHPLUS_ENDPOINT: &str = "http://www.pushplus.plus/send";

/// PushPlus notification sender
pub struct PushPlusSender {
    token: String,
    template: PushTemplate,
    endpoint: String,
    transport: Arc<dyn HttpTransport>,
    timeout: Duration,
}

impl PushPlusSender {
    pub fn new(
        token: String,
        template: PushTemplate,
        transport: Arc<dyn HttpTransport>,
        timeout: Duration,
    ) -> Self {
        Self {
            token,
            template,
            endpoint: PUSHPLUS_ENDPOINT.to_string(),
            transport,
            timeout,
        }
    }
}
