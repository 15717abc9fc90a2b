pub mod check_in_executor;
pub mod check_in_runner;
pub mod notification_service;
pub mod pacing;

pub use check_in_executor::CheckInExecutor;
pub use check_in_runner::CheckInRunner;
pub use notification_service::NotificationService;
pub use pacing::PauseRange;
