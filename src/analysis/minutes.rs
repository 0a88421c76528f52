use super::history::{GameHistory, GameRecord};

/// Size of the recent window used when the player has been playing regularly.
const RECENT_WINDOW: usize = 15;

/// How many recent games a player has missed.
///
/// Each flag is checked once, right after walking a fixed number of games
/// from the most recent one. A flag whose checkpoint lies beyond the end of
/// the history stays false: games that have not happened yet cannot be missed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissedGamesProfile {
    /// 1 of the last 1.
    pub missed_last_game: bool,
    /// 5 of the last 5.
    pub missed_last_five: bool,
    /// At least 10 of the last 15.
    pub missed_ten_of_last_fifteen: bool,
    /// At least 15 of the last 30.
    pub missed_fifteen_of_last_thirty: bool,
}

impl MissedGamesProfile {
    /// Recent data is too sparse to weight towards the latest games.
    pub fn recent_data_sparse(&self) -> bool {
        self.missed_last_five || self.missed_ten_of_last_fifteen
    }

    fn record_checkpoint(&mut self, games_seen: usize, missed: usize) {
        match games_seen {
            1 => self.missed_last_game = missed >= 1,
            5 => self.missed_last_five = missed >= 5,
            15 => self.missed_ten_of_last_fifteen = missed >= 10,
            30 => self.missed_fifteen_of_last_thirty = missed >= 15,
            _ => {}
        }
    }
}

pub struct MinutesEstimator;

impl MinutesEstimator {
    /// Missed-games profile and projected minutes.
    ///
    /// Minutes are `None` when every game in the history was missed.
    pub fn estimate(history: &GameHistory) -> (MissedGamesProfile, Option<u32>) {
        let profile = Self::profile(history);

        if history.all_missed() {
            return (profile, None);
        }

        let games = history.games();
        let recent = &games[..games.len().min(RECENT_WINDOW)];

        let average = if profile.recent_data_sparse() {
            Self::average_minutes(games)
        } else {
            Self::average_minutes(recent).or_else(|| Self::average_minutes(games))
        };

        (profile, average.map(|mins| mins.round() as u32))
    }

    pub fn profile(history: &GameHistory) -> MissedGamesProfile {
        let mut profile = MissedGamesProfile::default();
        let mut missed = 0;

        for (i, game) in history.games().iter().enumerate() {
            if game.is_none() {
                missed += 1;
            }
            profile.record_checkpoint(i + 1, missed);
        }

        profile
    }

    /// Mean minutes over the played games; missed games count in neither the
    /// sum nor the denominator.
    fn average_minutes(games: &[Option<GameRecord>]) -> Option<f64> {
        let (total, played) = games
            .iter()
            .flatten()
            .fold((0.0, 0usize), |(total, played), game| {
                (total + f64::from(game.minutes()), played + 1)
            });

        (played > 0).then(|| total / played as f64)
    }
}
