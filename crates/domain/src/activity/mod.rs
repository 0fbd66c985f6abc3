pub mod action;
pub mod entry;
pub mod error;
pub mod timestamp;
