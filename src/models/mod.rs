pub mod auth;
pub mod football_match;
pub mod profile;
pub mod stats;
pub mod user;
pub mod user_match;
