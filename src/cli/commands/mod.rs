pub mod config;
pub mod init;
pub mod insights;
pub mod report;
pub mod stats;
