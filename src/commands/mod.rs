//! CLI commands

pub mod init;
pub mod preview;
pub mod run;
pub mod topics;
