mod log_level;
mod settings;
mod timeouts;

pub use log_level::LogLevel;
pub use settings::{
    FileConfig, Settings, ENV_CONFIG_FILE, ENV_COOKIES, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_MIRRORS,
    ENV_PAUSE_MAX_MS, ENV_PAUSE_MIN_MS, ENV_PUSH_TEMPLATE, ENV_SENDKEY, ENV_TIMEOUT_SECS,
};
pub use timeouts::TimeoutConfig;
