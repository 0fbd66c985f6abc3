pub mod file_activity_store;
pub mod seed;
