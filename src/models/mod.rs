pub mod anomaly;
pub mod event_kind;
pub mod job;
pub mod log_entry;
pub mod severity;
