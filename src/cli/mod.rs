//! CLI command implementations

pub mod account;
pub mod daily;
pub mod init;
