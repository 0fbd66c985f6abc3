#![forbid(unsafe_code)]

pub mod activity_log;
pub mod log_feed;
pub mod stats;
