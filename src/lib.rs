pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod network;
pub mod reporting;
pub mod types;
