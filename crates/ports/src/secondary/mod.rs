pub mod activity_store;
pub mod complaint_source;
pub mod user_directory;
