//! Scrape-to-prediction pipeline for a single player.

use crate::analysis::{GameHistory, GameRecord, MinutesEstimator, ModelSet, Predictor, HISTORY_CAP};
use crate::api::endpoints;
use crate::api::models::{GameRow, OpponentRatings};
use crate::api::PageFetcher;
use crate::config::Config;
use crate::display::output::format_prediction;
use crate::error::AppError;
use crate::scrape::player_page::HeaderMatch;
use crate::scrape::{GameLogParser, PlayerPageParser, ScheduleParser, TeamPageParser};
use indicatif::ProgressBar;
use log::{debug, info, warn};

pub struct StatProjector<F: PageFetcher> {
    config: Config,
    fetcher: F,
    progress: ProgressBar,
}

impl<F: PageFetcher> StatProjector<F> {
    pub fn new(config: Config, fetcher: F) -> Self {
        StatProjector {
            config,
            fetcher,
            progress: ProgressBar::hidden(),
        }
    }

    /// Progress bar ticked once per opponent page fetched for the game history.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Projected stat line for the player's next game, or a message saying
    /// why there is none.
    pub fn predict_next_game(&self, player: &str) -> String {
        match self.try_predict_next_game(player) {
            Ok(message) => message,
            Err(e) => {
                warn!("no projection for {:?}: {}", player, e);
                e.to_string()
            }
        }
    }

    pub fn try_predict_next_game(&self, player: &str) -> Result<String, AppError> {
        let player = player.trim();
        let page = self.resolve_player(player)?;

        let game_log = GameLogParser::parse(&page)?.ok_or(AppError::RetiredOrInactivePlayer)?;
        if game_log.games.is_empty() {
            return Err(AppError::NoGamesYet(player.to_string()));
        }

        let recent = &game_log.games[..game_log.games.len().min(HISTORY_CAP)];
        if !recent.iter().any(GameRow::is_played) {
            return Err(AppError::AllGamesMissed(player.to_string()));
        }

        let schedule_path = endpoints::team_schedule_path(&game_log.team, self.config.season);
        let schedule = self.fetcher.fetch_page(&schedule_path)?;
        let next = ScheduleParser::next_opponent(&schedule)
            .ok_or_else(|| AppError::NoUpcomingGame(player.to_string()))?;
        info!("{} ({}) play {} next", player, game_log.team, next.name);

        let ratings = self
            .fetch_ratings(&next.link)?
            .ok_or_else(|| AppError::OpponentRatingsUnavailable(next.name.clone()))?;

        let history = self.build_history(recent)?;
        let (missed, minutes) = MinutesEstimator::estimate(&history);
        let minutes = minutes.ok_or_else(|| AppError::AllGamesMissed(player.to_string()))?;
        debug!("missed games: {:?}, projected minutes: {}", missed, minutes);

        let models = ModelSet::build(&history);
        let prediction = Predictor::predict(minutes, &models, ratings).with_identity(
            player,
            self.config.team_name(&game_log.team),
            next.name,
        );

        Ok(format_prediction(&missed, &prediction))
    }

    /// Game log of the player with exactly this first and last name.
    ///
    /// Players sharing the first five letters of a surname and the first two
    /// of a first name are numbered 01, 02, ... in their page ids, so each
    /// index is tried until the page header names the player. A page whose
    /// header has a different surname (or no page at all) means the numbers
    /// have run out.
    pub fn resolve_player(&self, player: &str) -> Result<String, AppError> {
        let names: Vec<String> = player
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let [first, last, ..] = names.as_slice() else {
            return Err(AppError::InvalidPlayerName);
        };

        for index in 1..=self.config.max_disambiguation {
            let page = match self
                .fetcher
                .fetch_player_log_page(last, first, index, self.config.season)
            {
                Ok(page) => page,
                Err(AppError::PageNotFound(_)) => return Err(AppError::InvalidPlayerName),
                Err(e) => return Err(e),
            };

            match PlayerPageParser::match_header(&page, first, last) {
                HeaderMatch::Player => {
                    debug!("resolved {} at index {}", player, index);
                    return Ok(page);
                }
                HeaderMatch::Namesake => continue,
                HeaderMatch::NotAPlayer => return Err(AppError::InvalidPlayerName),
            }
        }

        Err(AppError::InvalidPlayerName)
    }

    /// `None` when the team page no longer has the expected rating blocks.
    pub fn fetch_ratings(&self, team_link: &str) -> Result<Option<OpponentRatings>, AppError> {
        match self.fetcher.fetch_page(team_link) {
            Ok(page) => Ok(TeamPageParser::parse_ratings(&page)),
            Err(AppError::PageNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Attach each played game's opponent ratings. Every played row costs one
    /// team page fetch, even when the opponent repeats.
    fn build_history(&self, rows: &[GameRow]) -> Result<GameHistory, AppError> {
        let played = rows.iter().filter(|row| row.is_played()).count();
        self.progress.set_length(played as u64);
        self.progress.set_message("Fetching opponent ratings");

        let mut games = Vec::with_capacity(rows.len());
        for row in rows {
            match row {
                GameRow::NotPlayed => games.push(None),
                GameRow::Played(game) => {
                    let ratings = self.fetch_ratings(&game.opponent_link)?.ok_or_else(|| {
                        AppError::OpponentRatingsUnavailable(game.opponent.clone())
                    })?;
                    self.progress.inc(1);
                    games.push(Some(GameRecord::new(game.box_score.clone(), ratings)));
                }
            }
        }

        self.progress.finish_and_clear();
        Ok(GameHistory::new(games))
    }
}
