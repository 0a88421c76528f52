// Values scraped from basketball-reference pages, before normalization.

/// One table cell: numeric where the text parses as a number, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed.parse::<f64>() {
            Ok(value) => Cell::Number(value),
            Err(_) => Cell::Text(trimmed.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            Cell::Text(_) => None,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Cell::Number(value) => value.to_string(),
            Cell::Text(text) => text.clone(),
        }
    }
}

/// The counting stats kept from one played game.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxScore {
    pub minutes: u32,
    pub field_goals_made: f64,
    pub field_goals_attempted: f64,
    pub threes_made: f64,
    pub threes_attempted: f64,
    pub free_throws_made: f64,
    pub free_throws_attempted: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayedGame {
    pub box_score: BoxScore,
    pub opponent: String,
    pub opponent_link: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameRow {
    /// Inactive, did not play, or a coach's decision.
    NotPlayed,
    Played(PlayedGame),
}

impl GameRow {
    pub fn is_played(&self) -> bool {
        matches!(self, GameRow::Played(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameLog {
    /// Abbreviation of the team the player appeared for most recently.
    pub team: String,
    /// Most recent game first.
    pub games: Vec<GameRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NextOpponent {
    pub link: String,
    pub name: String,
}

/// League ranks (1 = best) of the opponent in each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentRatings {
    pub offense: u32,
    pub defense: u32,
    pub pace: u32,
}

impl OpponentRatings {
    pub fn new(offense: u32, defense: u32, pace: u32) -> Self {
        OpponentRatings { offense, defense, pace }
    }
}
