use log::{debug, info, warn};

use glados_domain::check_in::{CheckInOutcome, CheckInReply, PointsReply, StatusReply};

/// Interpret the check-in reply. A missing or unreadable body is a failed
/// check-in, never a fault.
pub fn interpret_check_in(index: usize, body: Option<String>) -> CheckInOutcome {
    let Some(body) = body else {
        warn!("[account {}] Check-in: no mirror answered", index);
        return CheckInOutcome::no_response();
    };
    debug!("[account {}] Check-in reply: {}", index, body);

    match CheckInReply::parse(&body) {
        Ok(reply) => {
            let outcome = reply.into_outcome();
            info!(
                "[account {}] Check-in: {} ({})",
                index, outcome.status, outcome.message
            );
            outcome
        }
        Err(e) => {
            warn!("[account {}] Check-in: {}", index, e);
            CheckInOutcome::malformed(e.message())
        }
    }
}

/// Interpret the status reply; `None` keeps the email and days defaults.
pub fn interpret_status(index: usize, body: Option<String>) -> Option<StatusReply> {
    let body = body?;
    debug!("[account {}] Status reply: {}", index, body);

    StatusReply::parse(&body)
        .map_err(|e| warn!("[account {}] Status: {}", index, e))
        .ok()
}

/// Interpret the points reply; `None` keeps the points default and the
/// exchange placeholder.
pub fn interpret_points(index: usize, body: Option<String>) -> Option<PointsReply> {
    let body = body?;
    debug!("[account {}] Points reply: {}", index, body);

    PointsReply::parse(&body)
        .map_err(|e| warn!("[account {}] Points: {}", index, e))
        .ok()
}
