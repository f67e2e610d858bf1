pub mod entry;
pub mod log;
pub mod stats;
