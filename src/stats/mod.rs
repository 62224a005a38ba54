pub mod player_totals;
pub mod win_rate;

pub use player_totals::order_current_user_first;
pub use win_rate::{percentage, win_rate_report};
