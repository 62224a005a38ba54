pub mod auth_handler;
pub mod backend_health_handler;
pub mod match_handler;
pub mod page_handler;
pub mod registration_handler;
pub mod stats_handler;
