pub mod activity;
pub mod habit;
pub mod log_entry;
