pub mod config;
pub mod init;
pub mod options;
pub mod plan;
pub mod serve;
