pub mod helpers;
pub mod matches;
pub mod user_matches;
pub mod users;
