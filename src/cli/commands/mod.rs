pub mod attendance;
pub mod auth;
pub mod config;
pub mod history;
pub mod init;
pub mod log;
