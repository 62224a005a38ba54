use std::collections::BTreeMap;

use crate::models::football_match::Match;
use crate::models::stats::{GroupWinRate, WinRateReport};

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    wins: usize,
    total: usize,
}

impl Tally {
    fn record(&mut self, game: &Match) {
        self.total += 1;
        if game.is_win() {
            self.wins += 1;
        }
    }

    fn rate(&self) -> GroupWinRate {
        GroupWinRate {
            win_rate: percentage(self.wins, self.total),
            total_matches: self.total,
        }
    }
}

/// `part / whole` as a percentage rounded to two decimals, 0 for an empty whole.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let raw = part as f64 / whole as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// Win rates overall, per location and per opponent (the away side).
///
/// A match whose grouping key is missing still counts towards the overall
/// figure but is left out of that group table.
pub fn win_rate_report(matches: &[Match]) -> WinRateReport {
    let mut overall = Tally::default();
    let mut by_location: BTreeMap<String, Tally> = BTreeMap::new();
    let mut by_opponent: BTreeMap<String, Tally> = BTreeMap::new();

    for game in matches {
        overall.record(game);
        if let Some(location) = &game.location {
            by_location.entry(location.clone()).or_default().record(game);
        }
        if let Some(opponent) = &game.away_team {
            by_opponent.entry(opponent.clone()).or_default().record(game);
        }
    }

    WinRateReport {
        overall_win_rate: overall.rate().win_rate,
        location_win_rates: by_location.into_iter().map(|(k, t)| (k, t.rate())).collect(),
        away_team_win_rates: by_opponent.into_iter().map(|(k, t)| (k, t.rate())).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_two_places() {
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(4, 4), 100.0);
    }
}
