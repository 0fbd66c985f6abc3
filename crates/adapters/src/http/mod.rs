pub mod activity_handler;
pub mod error;
pub mod health_handler;
pub mod openapi;
pub mod router;
pub mod server;
pub mod state;
pub mod stats_handler;
