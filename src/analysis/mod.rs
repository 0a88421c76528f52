pub mod history;
pub mod minutes;
pub mod predictor;
pub mod regression;
pub mod stats;

pub use history::{GameHistory, GameRecord, HISTORY_CAP};
pub use minutes::{MinutesEstimator, MissedGamesProfile};
pub use predictor::{PredictionSet, Predictor};
pub use regression::{ModelSet, StatModel};
pub use stats::{Field, Stat};
