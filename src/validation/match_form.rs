use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;

use crate::models::football_match::NewMatch;
use crate::models::user_match::StatLine;

/// Flash text shown for any rejected add-match form.
pub const MATCH_FORM_FLASH: &str = "Please fill in the blanks.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub reason: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// All problems found in one submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid match form: {} problem(s)", .problems.len())]
pub struct MatchFormError {
    pub problems: Vec<FieldError>,
}

/// A fully validated add-match submission.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchForm {
    pub new_match: NewMatch,
    pub player_stats: Vec<(i32, StatLine)>,
}

struct Collector<'a> {
    form: &'a HashMap<String, String>,
    problems: Vec<FieldError>,
}

impl<'a> Collector<'a> {
    fn reject(&mut self, field: &str, reason: &'static str) {
        self.problems.push(FieldError { field: field.to_string(), reason });
    }

    fn text(&mut self, field: &str) -> Option<String> {
        match self.form.get(field).map(|v| v.trim()) {
            Some(value) if !value.is_empty() => Some(value.to_string()),
            _ => {
                self.reject(field, "required");
                None
            }
        }
    }

    fn optional_text(&self, field: &str) -> Option<String> {
        self.form
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn score(&mut self, field: &str) -> Option<i32> {
        let raw = self.text(field)?;
        match raw.parse::<i32>() {
            Ok(score) if score >= 0 => Some(score),
            Ok(_) => {
                self.reject(field, "must not be negative");
                None
            }
            Err(_) => {
                self.reject(field, "not a whole number");
                None
            }
        }
    }

    fn date(&mut self, field: &str) -> Option<NaiveDate> {
        let raw = self.text(field)?;
        match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.reject(field, "not a YYYY-MM-DD date");
                None
            }
        }
    }

    // Absent per-player fields default to 0, present ones must parse.
    fn stat(&mut self, field: &str) -> i32 {
        match self.form.get(field) {
            None => 0,
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(value) => value,
                Err(_) => {
                    self.reject(field, "not a whole number");
                    0
                }
            },
        }
    }
}

/// Validate an add-match submission for the given players.
///
/// Per-player fields are keyed `<stat>_<user id>`, e.g. `goals_4`.
pub fn parse_match_form(
    form: &HashMap<String, String>,
    user_ids: &[i32],
) -> Result<MatchForm, MatchFormError> {
    let mut collector = Collector { form, problems: Vec::new() };

    let home_team = collector.text("home_team");
    let away_team = collector.text("away_team");
    let home_team_result = collector.score("home_team_result");
    let away_team_result = collector.score("away_team_result");
    let date = collector.date("date");
    let location = collector.optional_text("location");

    let mut player_stats = Vec::with_capacity(user_ids.len());
    for &user_id in user_ids {
        let mut line = StatLine::default();
        for field in StatLine::FIELDS {
            let value = collector.stat(&format!("{}_{}", field, user_id));
            line.set(field, value);
        }
        player_stats.push((user_id, line));
    }

    match (home_team, away_team, home_team_result, away_team_result, date) {
        (Some(home_team), Some(away_team), Some(home_team_result), Some(away_team_result), Some(date))
            if collector.problems.is_empty() =>
        {
            Ok(MatchForm {
                new_match: NewMatch {
                    home_team,
                    away_team,
                    home_team_result,
                    away_team_result,
                    date,
                    location,
                },
                player_stats,
            })
        }
        _ => Err(MatchFormError { problems: collector.problems }),
    }
}
