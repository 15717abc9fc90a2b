use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use glados_domain::check_in::CheckInGateway;
use glados_domain::notification::{NotificationMessage, NotificationSender};
use glados_domain::{Credential, DomainError};

/// Which gateway endpoint was called
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    CheckIn,
    Status,
    Points,
}

/// Scripted gateway answer
#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    NoResponse,
    Fault(String),
    Panic,
}

impl Reply {
    pub fn body(text: &str) -> Self {
        Reply::Body(text.to_string())
    }
}

#[derive(Default)]
struct Script {
    check_in: VecDeque<Reply>,
    status: VecDeque<Reply>,
    points: VecDeque<Reply>,
}

/// In-memory `CheckInGateway`: replays queued replies per endpoint and
/// records every call. An exhausted queue answers like a dead mirror list.
#[derive(Default)]
pub struct FakeGateway {
    script: Mutex<Script>,
    calls: Mutex<Vec<(Call, String)>>,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, call: Call, reply: Reply) {
        let mut script = self.script.lock().unwrap();
        match call {
            Call::CheckIn => script.check_in.push_back(reply),
            Call::Status => script.status.push_back(reply),
            Call::Points => script.points.push_back(reply),
        }
    }

    /// Queue the three replies of one account
    pub fn push_account(&self, check_in: Reply, status: Reply, points: Reply) {
        self.push(Call::CheckIn, check_in);
        self.push(Call::Status, status);
        self.push(Call::Points, points);
    }

    pub fn calls(&self) -> Vec<(Call, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: Call) -> usize {
        self.calls().iter().filter(|(c, _)| *c == call).count()
    }

    fn answer(&self, call: Call, credential: &Credential) -> Result<Option<String>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((call, credential.as_str().to_string()));

        let reply = {
            let mut script = self.script.lock().unwrap();
            let queue = match call {
                Call::CheckIn => &mut script.check_in,
                Call::Status => &mut script.status,
                Call::Points => &mut script.points,
            };
            queue.pop_front().unwrap_or(Reply::NoResponse)
        };

        match reply {
            Reply::Body(body) => Ok(Some(body)),
            Reply::NoResponse => Ok(None),
            Reply::Fault(message) => Err(DomainError::InvalidInput(message)),
            Reply::Panic => panic!("scripted gateway panic"),
        }
    }
}

#[async_trait]
impl CheckInGateway for FakeGateway {
    async fn check_in(&self, credential: &Credential) -> Result<Option<String>, DomainError> {
        self.answer(Call::CheckIn, credential)
    }

    async fn fetch_status(&self, credential: &Credential) -> Result<Option<String>, DomainError> {
        self.answer(Call::Status, credential)
    }

    async fn fetch_points(&self, credential: &Credential) -> Result<Option<String>, DomainError> {
        self.answer(Call::Points, credential)
    }
}

/// Captures every message instead of pushing it
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<NotificationMessage>>,
    fail: bool,
}

impl RecordingSender {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn sent(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for RecordingSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail {
            return Err(DomainError::Infrastructure(
                "push endpoint unreachable".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn credentials(values: &[&str]) -> Vec<Credential> {
    values.iter().filter_map(|v| Credential::new(v)).collect()
}
