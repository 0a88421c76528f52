use crate::api::models::{BoxScore, OpponentRatings};

use super::stats::Field;

/// Only the most recent games feed the estimator and the models.
pub const HISTORY_CAP: usize = 30;

/// One played game with the opponent's ratings attached.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub box_score: BoxScore,
    pub opponent: OpponentRatings,
}

impl GameRecord {
    pub fn new(box_score: BoxScore, opponent: OpponentRatings) -> Self {
        GameRecord { box_score, opponent }
    }

    pub fn minutes(&self) -> u32 {
        self.box_score.minutes
    }

    pub fn get(&self, field: Field) -> f64 {
        let b = &self.box_score;
        match field {
            Field::FieldGoalsMade => b.field_goals_made,
            Field::FieldGoalsAttempted => b.field_goals_attempted,
            Field::ThreesMade => b.threes_made,
            Field::ThreesAttempted => b.threes_attempted,
            Field::FreeThrowsMade => b.free_throws_made,
            Field::FreeThrowsAttempted => b.free_throws_attempted,
            Field::Rebounds => b.rebounds,
            Field::Assists => b.assists,
            Field::Steals => b.steals,
            Field::Blocks => b.blocks,
            Field::Turnovers => b.turnovers,
            Field::Minutes => f64::from(b.minutes),
            Field::OpponentOffense => f64::from(self.opponent.offense),
            Field::OpponentDefense => f64::from(self.opponent.defense),
            Field::OpponentPace => f64::from(self.opponent.pace),
        }
    }
}

/// Recent games, most recent first; `None` marks a game the player missed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameHistory {
    games: Vec<Option<GameRecord>>,
}

impl GameHistory {
    pub fn new(mut games: Vec<Option<GameRecord>>) -> Self {
        games.truncate(HISTORY_CAP);
        GameHistory { games }
    }

    pub fn games(&self) -> &[Option<GameRecord>] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn played(&self) -> impl Iterator<Item = &GameRecord> {
        self.games.iter().flatten()
    }

    pub fn missed_count(&self) -> usize {
        self.games.iter().filter(|game| game.is_none()).count()
    }

    pub fn all_missed(&self) -> bool {
        self.played().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::record;

    #[test]
    fn test_history_is_capped() {
        let games = (0..45).map(|i| Some(record(i, 10.0))).collect();
        let history = GameHistory::new(games);
        assert_eq!(history.len(), HISTORY_CAP);
        // Truncation drops the oldest games, which sit at the end
        assert_eq!(history.games()[0].as_ref().unwrap().minutes(), 0);
        assert_eq!(history.games()[29].as_ref().unwrap().minutes(), 29);
    }

    #[test]
    fn test_record_fields() {
        let game = record(31, 12.0);
        assert_eq!(game.get(Field::Minutes), 31.0);
        assert_eq!(game.get(Field::Rebounds), 12.0);
        assert_eq!(game.get(Field::OpponentOffense), 10.0);
        assert_eq!(game.get(Field::OpponentDefense), 20.0);
        assert_eq!(game.get(Field::OpponentPace), 15.0);
    }

    #[test]
    fn test_played_skips_missed_games() {
        let history = GameHistory::new(vec![None, Some(record(20, 5.0)), None]);
        assert_eq!(history.played().count(), 1);
        assert_eq!(history.missed_count(), 2);
        assert!(!history.all_missed());
        assert!(GameHistory::new(vec![None, None]).all_missed());
    }
}
