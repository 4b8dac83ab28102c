pub mod batch;
pub mod config;
pub mod init;
pub mod query;
