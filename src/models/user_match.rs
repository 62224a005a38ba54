use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserMatch {
    pub id: i32,
    pub user_id: i32,
    pub match_id: i32,
    pub goals: Option<i32>,
    pub shots: Option<i32>,
    pub shots_on_target: Option<i32>,
    pub passes: Option<i32>,
    pub fouls: Option<i32>,
    pub yellow_cards: Option<i32>,
    pub red_cards: Option<i32>,
}

/// One player's numbers for one match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub goals: i32,
    pub shots: i32,
    pub shots_on_target: i32,
    pub passes: i32,
    pub fouls: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

impl StatLine {
    /// Field names in form/JSON order.
    pub const FIELDS: [&'static str; 7] = [
        "goals",
        "shots",
        "shots_on_target",
        "passes",
        "fouls",
        "yellow_cards",
        "red_cards",
    ];

    pub fn set(&mut self, field: &str, value: i32) {
        match field {
            "goals" => self.goals = value,
            "shots" => self.shots = value,
            "shots_on_target" => self.shots_on_target = value,
            "passes" => self.passes = value,
            "fouls" => self.fouls = value,
            "yellow_cards" => self.yellow_cards = value,
            "red_cards" => self.red_cards = value,
            _ => {}
        }
    }
}

/// Body of `POST /saveStats`. Everything is optional so that missing pieces
/// can be reported as a 400 with a JSON body instead of a deserializer error.
#[derive(Debug, Deserialize)]
pub struct SaveStatsRequest {
    pub user_id: Option<i32>,
    pub match_id: Option<i32>,
    pub stats: Option<StatLine>,
}
