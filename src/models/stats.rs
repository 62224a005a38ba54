use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Cumulative numbers of one player over every recorded match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerTotals {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub total_goals: i64,
    pub total_shots: i64,
    pub total_shots_on_target: i64,
    pub total_passes: i64,
    pub total_fouls: i64,
    pub total_yellow_cards: i64,
    pub total_red_cards: i64,
    #[sqlx(default)]
    pub is_current_user: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupWinRate {
    pub win_rate: f64,
    pub total_matches: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinRateReport {
    pub overall_win_rate: f64,
    pub location_win_rates: BTreeMap<String, GroupWinRate>,
    pub away_team_win_rates: BTreeMap<String, GroupWinRate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MonthlyCount {
    pub month: i32,
    pub count: i64,
}
