pub mod config;
pub mod fields;
pub mod fill;
pub mod init;
pub mod report;
