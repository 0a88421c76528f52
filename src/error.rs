use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please enter the name of a valid NBA player")]
    InvalidPlayerName,

    #[error("Please enter the name of a current NBA player")]
    RetiredOrInactivePlayer,

    #[error("Could not find any stats from previous games this year for {0}")]
    NoGamesYet(String),

    #[error("{0} has missed their last 30 games (or however many have been played so far). Hence, stats cannot be predicted.")]
    AllGamesMissed(String),

    #[error("Cannot find an upcoming game for {0}")]
    NoUpcomingGame(String),

    #[error("Could not get ratings for {0}")]
    OpponentRatingsUnavailable(String),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Unexpected page format: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
