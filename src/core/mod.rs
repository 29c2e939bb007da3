pub mod decoder;
pub mod matcher;
pub mod report;
pub mod watch;
