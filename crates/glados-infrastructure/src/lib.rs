// Infrastructure layer - HTTP transport, GLaDOS gateway, push sender,
// configuration loading and logging setup

pub mod config;
pub mod http;
pub mod logging;
pub mod notification;
