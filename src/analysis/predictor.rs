use crate::api::models::OpponentRatings;
use log::debug;

use super::regression::ModelSet;
use super::stats::{Field, Stat};

/// Projected line for the next game.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionSet {
    pub player: String,
    pub team: String,
    pub opponent: String,
    pub minutes: u32,
    pub ratings: OpponentRatings,
    values: [i64; Stat::COUNT],
}

impl PredictionSet {
    pub fn get(&self, stat: Stat) -> i64 {
        self.values[stat.index()]
    }

    pub fn values(&self) -> impl Iterator<Item = (Stat, i64)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }

    pub fn points(&self) -> i64 {
        let twos = self.get(Stat::FieldGoalsMade) - self.get(Stat::ThreesMade);
        twos * 2 + self.get(Stat::ThreesMade) * 3 + self.get(Stat::FreeThrowsMade)
    }

    pub fn with_identity(
        mut self,
        player: impl Into<String>,
        team: impl Into<String>,
        opponent: impl Into<String>,
    ) -> Self {
        self.player = player.into();
        self.team = team.into();
        self.opponent = opponent.into();
        self
    }
}

pub struct Predictor;

impl Predictor {
    /// Evaluate every model for the upcoming matchup.
    ///
    /// Statistics are evaluated in dependency order, so a derived statistic
    /// such as made field goals reads the already-rounded projection of
    /// attempted field goals. Each value is rounded half away from zero.
    pub fn predict(minutes: u32, models: &ModelSet, ratings: OpponentRatings) -> PredictionSet {
        let mut values: [Option<i64>; Stat::COUNT] = [None; Stat::COUNT];

        for stat in Stat::evaluation_order() {
            let model = models.get(stat);
            let inputs: Vec<f64> = model
                .explanatory()
                .iter()
                .map(|field| Self::input(*field, minutes, ratings, &values))
                .collect();

            let value = model.evaluate(&inputs).round() as i64;
            debug!("{} = {} from inputs {:?}", stat.key(), value, inputs);
            values[stat.index()] = Some(value);
        }

        PredictionSet {
            player: String::new(),
            team: String::new(),
            opponent: String::new(),
            minutes,
            ratings,
            values: values.map(Option::unwrap_or_default),
        }
    }

    fn input(
        field: Field,
        minutes: u32,
        ratings: OpponentRatings,
        predicted: &[Option<i64>; Stat::COUNT],
    ) -> f64 {
        match field {
            Field::Minutes => f64::from(minutes),
            Field::OpponentOffense => f64::from(ratings.offense),
            Field::OpponentDefense => f64::from(ratings.defense),
            Field::OpponentPace => f64::from(ratings.pace),
            other => {
                let stat = other
                    .stat()
                    .expect("every box-score field is a predicted statistic");
                predicted[stat.index()].expect("dependencies are evaluated first") as f64
            }
        }
    }
}
