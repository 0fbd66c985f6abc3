#![forbid(unsafe_code)]

pub mod activity;
pub mod complaint;
pub mod stats;
pub mod user;
