// Domain layer - check-in rules and report semantics
// No dependencies on infrastructure or the binary

pub mod check_in;
pub mod credential;
pub mod exchange;
pub mod notification;
pub mod report;
pub mod shared;

// Re-exports for convenience
pub use credential::{load_credentials, Credential};
pub use shared::DomainError;
