use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One played fixture. The home side is always the tracked team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Match {
    pub id: i32,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_team_result: Option<i32>,
    pub away_team_result: Option<i32>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
}

impl Match {
    pub fn is_win(&self) -> bool {
        match (self.home_team_result, self.away_team_result) {
            (Some(home), Some(away)) => home > away,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMatch {
    pub home_team: String,
    pub away_team: String,
    pub home_team_result: i32,
    pub away_team_result: i32,
    pub date: NaiveDate,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(home: Option<i32>, away: Option<i32>) -> Match {
        Match {
            id: 1,
            home_team: Some("Team A".into()),
            away_team: Some("Team B".into()),
            home_team_result: home,
            away_team_result: away,
            date: None,
            location: None,
        }
    }

    #[test]
    fn only_a_strictly_higher_home_score_is_a_win() {
        assert!(fixture(Some(3), Some(1)).is_win());
        assert!(!fixture(Some(1), Some(1)).is_win());
        assert!(!fixture(Some(0), Some(2)).is_win());
        assert!(!fixture(None, Some(2)).is_win());
        assert!(!fixture(Some(2), None).is_win());
    }
}
