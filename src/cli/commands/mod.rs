pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod history;
pub mod init;
pub mod list;
pub mod log;
pub mod set;
pub mod stats;
pub mod toggle;
