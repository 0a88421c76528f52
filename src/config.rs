use crate::error::AppError;
use chrono::{Datelike, Local};
use std::env;

pub const DEFAULT_SITE: &str = "https://www.basketball-reference.com";

/// basketball-reference allows roughly 20 requests a minute before it
/// starts answering with 429s.
const DEFAULT_REQUESTS_PER_MINUTE: u32 = 20;
const DEFAULT_MAX_DISAMBIGUATION: u32 = 15;

pub const TEAMS: [(&str, &str); 30] = [
    ("ATL", "Atlanta Hawks"),
    ("BRK", "Brooklyn Nets"),
    ("BOS", "Boston Celtics"),
    ("CHO", "Charlotte Hornets"),
    ("CHI", "Chicago Bulls"),
    ("CLE", "Cleveland Cavaliers"),
    ("DAL", "Dallas Mavericks"),
    ("DEN", "Denver Nuggets"),
    ("DET", "Detroit Pistons"),
    ("GSW", "Golden State Warriors"),
    ("HOU", "Houston Rockets"),
    ("IND", "Indiana Pacers"),
    ("LAC", "Los Angeles Clippers"),
    ("LAL", "Los Angeles Lakers"),
    ("MEM", "Memphis Grizzlies"),
    ("MIA", "Miami Heat"),
    ("MIL", "Milwaukee Bucks"),
    ("MIN", "Minnesota Timberwolves"),
    ("NOP", "New Orleans Pelicans"),
    ("NYK", "New York Knicks"),
    ("OKC", "Oklahoma City Thunder"),
    ("ORL", "Orlando Magic"),
    ("PHI", "Philadelphia 76ers"),
    ("PHO", "Phoenix Suns"),
    ("POR", "Portland Trail Blazers"),
    ("SAC", "Sacramento Kings"),
    ("SAS", "San Antonio Spurs"),
    ("TOR", "Toronto Raptors"),
    ("UTA", "Utah Jazz"),
    ("WAS", "Washington Wizards"),
];

#[derive(Debug, Clone)]
pub struct Config {
    pub site: String,
    pub season: i32,
    pub requests_per_minute: u32,
    pub max_disambiguation: u32,
}

impl Config {
    pub fn new(site: impl Into<String>, season: i32) -> Self {
        Config {
            site: site.into(),
            season,
            requests_per_minute: DEFAULT_REQUESTS_PER_MINUTE,
            max_disambiguation: DEFAULT_MAX_DISAMBIGUATION,
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let site = env::var("BBREF_SITE").unwrap_or_else(|_| DEFAULT_SITE.to_string());

        let season = match env::var("NBA_SEASON") {
            Ok(raw) => parse_var("NBA_SEASON", &raw)?,
            Err(_) => current_season(),
        };

        let mut config = Config::new(site, season);

        if let Ok(raw) = env::var("BBREF_REQUESTS_PER_MINUTE") {
            config.requests_per_minute = parse_var("BBREF_REQUESTS_PER_MINUTE", &raw)?;
            if config.requests_per_minute == 0 {
                return Err(AppError::ConfigError(
                    "BBREF_REQUESTS_PER_MINUTE must be at least 1".to_string(),
                ));
            }
        }

        if let Ok(raw) = env::var("BBREF_MAX_DISAMBIGUATION") {
            config.max_disambiguation = parse_var("BBREF_MAX_DISAMBIGUATION", &raw)?;
        }

        Ok(config)
    }

    /// Full team name for display; unknown abbreviations are shown as-is.
    pub fn team_name<'a>(&self, abbreviation: &'a str) -> &'a str {
        TEAMS
            .iter()
            .find(|(abbr, _)| *abbr == abbreviation)
            .map(|(_, name)| *name)
            .unwrap_or(abbreviation)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::ConfigError(format!("{} has an invalid value: {}", name, raw)))
}

/// Seasons are named after the year they end in, so games played from
/// September onwards belong to next year's season.
pub fn season_for(year: i32, month: u32) -> i32 {
    if month > 8 {
        year + 1
    } else {
        year
    }
}

pub fn current_season() -> i32 {
    let today = Local::now();
    season_for(today.year(), today.month())
}
