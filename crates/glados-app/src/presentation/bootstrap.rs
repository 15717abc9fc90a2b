use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use glados_domain::check_in::CheckInGateway;
use glados_infrastructure::config::Settings;
use glados_infrastructure::http::{GladosClient, HttpTransport, ReqwestTransport};
use glados_infrastructure::notification::create_sender;

use crate::application::services::{
    CheckInExecutor, CheckInRunner, NotificationService, PauseRange,
};

/// Wire the runner from resolved settings. One reqwest client backs both the
/// GLaDOS gateway and the push sender.
pub fn build_runner(settings: &Settings) -> Result<CheckInRunner> {
    let transport: Arc<dyn HttpTransport> =
        Arc::new(ReqwestTransport::new().context("Failed to build HTTP transport")?);
    let timeout = settings.timeouts.http_request;

    info!(
        "Mirrors: {} | timeout {}s | pause {}-{}ms",
        settings.endpoints.mirrors().join(", "),
        timeout.as_secs(),
        settings.timeouts.pause_min.as_millis(),
        settings.timeouts.pause_max.as_millis()
    );

    let gateway: Arc<dyn CheckInGateway> = Arc::new(GladosClient::new(
        transport.clone(),
        Arc::new(settings.endpoints.clone()),
        timeout,
    ));

    Ok(CheckInRunner::new(
        CheckInExecutor::new(gateway),
        build_notifications(settings, transport, timeout),
        PauseRange::from(&settings.timeouts),
        settings.push.template,
    ))
}

fn build_notifications(
    settings: &Settings,
    transport: Arc<dyn HttpTransport>,
    timeout: Duration,
) -> NotificationService {
    let notifications =
        NotificationService::new(create_sender(&settings.push, transport, timeout));
    if !notifications.is_enabled() {
        info!("SENDKEY not set, push notification disabled");
    }
    notifications
}
