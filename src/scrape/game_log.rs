//! Season game-log parser (`/players/x/xxxxxyy01/gamelog/YYYY`).

use crate::api::models::{BoxScore, Cell, GameLog, GameRow, PlayedGame};
use crate::error::AppError;
use log::debug;
use scraper::Html;

use super::{element_text, first_link, CELL, ROW, TBODY};

// Data-cell positions (the rank column is a <th> and is not counted).
// Columns 0..7 are G, Date, Age, Tm, home/away, Opp, Result.
const TEAM_COL: usize = 3;
const OPPONENT_COL: usize = 5;
const CONTEXT_COLS: usize = 7;

const MINUTES_COL: usize = 8;
const FG_COL: usize = 9;
const FGA_COL: usize = 10;
const THREE_COL: usize = 12;
const THREE_A_COL: usize = 13;
const FT_COL: usize = 15;
const FTA_COL: usize = 16;
const TRB_COL: usize = 20;
const AST_COL: usize = 21;
const STL_COL: usize = 22;
const BLK_COL: usize = 23;
const TOV_COL: usize = 24;

pub struct GameLogParser;

impl GameLogParser {
    /// Parse a season game log.
    ///
    /// Returns `Ok(None)` when the page has no data table, which is what
    /// basketball-reference serves for players without games this season.
    /// Games come back most recent first, with not-played rows kept in place.
    pub fn parse(html: &str) -> Result<Option<GameLog>, AppError> {
        let document = Html::parse_document(html);
        let Some(table) = document.select(&TBODY).next() else {
            return Ok(None);
        };

        let mut games = Vec::new();
        let mut team = String::new();

        for row in table.select(&ROW) {
            let data: Vec<_> = row.select(&CELL).collect();
            if data.is_empty() {
                // Repeated header rows only contain <th> cells
                continue;
            }

            let cells: Vec<Cell> = data.iter().map(|td| Cell::parse(&element_text(td))).collect();
            if let Some(cell) = cells.get(TEAM_COL) {
                team = cell.text();
            }

            // Not-played rows collapse everything after the context columns
            // into a single "Inactive"/"Did Not Play" cell.
            if cells.len() <= CONTEXT_COLS + 1 {
                games.push(GameRow::NotPlayed);
                continue;
            }

            let (opponent_link, opponent) = data
                .get(OPPONENT_COL)
                .and_then(first_link)
                .ok_or_else(|| AppError::ParseError("game row without an opponent link".to_string()))?;

            games.push(GameRow::Played(PlayedGame {
                box_score: Self::box_score(&cells)?,
                opponent,
                opponent_link,
            }));
        }

        games.reverse();
        debug!("parsed {} game log rows for {}", games.len(), team);

        Ok(Some(GameLog { team, games }))
    }

    fn box_score(cells: &[Cell]) -> Result<BoxScore, AppError> {
        let stat = |col: usize| -> Result<f64, AppError> {
            cells
                .get(col)
                .and_then(Cell::as_number)
                .ok_or_else(|| AppError::ParseError(format!("game log column {} is not numeric", col)))
        };

        let minutes = cells
            .get(MINUTES_COL)
            .ok_or_else(|| AppError::ParseError("game row without minutes".to_string()))?;

        Ok(BoxScore {
            minutes: Self::parse_minutes(minutes)?,
            field_goals_made: stat(FG_COL)?,
            field_goals_attempted: stat(FGA_COL)?,
            threes_made: stat(THREE_COL)?,
            threes_attempted: stat(THREE_A_COL)?,
            free_throws_made: stat(FT_COL)?,
            free_throws_attempted: stat(FTA_COL)?,
            rebounds: stat(TRB_COL)?,
            assists: stat(AST_COL)?,
            steals: stat(STL_COL)?,
            blocks: stat(BLK_COL)?,
            turnovers: stat(TOV_COL)?,
        })
    }

    /// "MM:SS" to whole minutes: more than 30 seconds rounds up, otherwise truncates.
    pub fn parse_minutes(cell: &Cell) -> Result<u32, AppError> {
        let malformed = || AppError::ParseError(format!("unreadable minutes played: {:?}", cell));

        match cell {
            Cell::Number(value) if *value >= 0.0 => Ok(value.trunc() as u32),
            Cell::Number(_) => Err(malformed()),
            Cell::Text(text) => {
                let (mins, secs) = text.split_once(':').ok_or_else(malformed)?;
                let mins: u32 = mins.trim().parse().map_err(|_| malformed())?;
                let secs: u32 = secs.trim().parse().map_err(|_| malformed())?;
                Ok(if secs > 30 { mins + 1 } else { mins })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played_row(date: &str, opp: &str, mp: &str, fg: u32, fga: u32) -> String {
        format!(
            r#"<tr><th>1</th><td>1</td><td>{date}</td><td>25-100</td><td><a href="/teams/LAL/2025.html">LAL</a></td><td>@</td><td><a href="/teams/{opp}/2025.html">{opp}</a></td><td>W (+5)</td><td>1</td><td>{mp}</td><td>{fg}</td><td>{fga}</td><td>.500</td><td>2</td><td>5</td><td>.400</td><td>3</td><td>4</td><td>.750</td><td>1</td><td>6</td><td>7</td><td>8</td><td>1</td><td>0</td><td>3</td><td>2</td><td>25</td><td>20.1</td><td>+5</td></tr>"#
        )
    }

    fn inactive_row(date: &str) -> String {
        format!(
            r#"<tr><th>2</th><td></td><td>{date}</td><td>25-101</td><td><a href="/teams/LAL/2025.html">LAL</a></td><td></td><td><a href="/teams/BOS/2025.html">BOS</a></td><td>L (-3)</td><td colspan="22">Inactive</td></tr>"#
        )
    }

    fn page(rows: &[String]) -> String {
        format!(
            "<html><body><h1>Test Player 2024-25 Game Log</h1><table><thead><tr><th>Rk</th></tr></thead><tbody>{}</tbody></table></body></html>",
            rows.join("")
        )
    }

    #[test]
    fn test_parse_minutes_rounding() {
        assert_eq!(GameLogParser::parse_minutes(&Cell::parse("34:31")).unwrap(), 35);
        assert_eq!(GameLogParser::parse_minutes(&Cell::parse("34:30")).unwrap(), 34);
        assert_eq!(GameLogParser::parse_minutes(&Cell::parse("0:05")).unwrap(), 0);
        assert_eq!(GameLogParser::parse_minutes(&Cell::parse("28")).unwrap(), 28);
        assert!(GameLogParser::parse_minutes(&Cell::parse("DNP")).is_err());
    }

    #[test]
    fn test_parse_orders_most_recent_first() {
        let html = page(&[
            played_row("2024-10-22", "MIN", "30:00", 5, 10),
            inactive_row("2024-10-24"),
            played_row("2024-10-26", "PHO", "36:45", 9, 18),
        ]);

        let log = GameLogParser::parse(&html).unwrap().unwrap();
        assert_eq!(log.team, "LAL");
        assert_eq!(log.games.len(), 3);

        match &log.games[0] {
            GameRow::Played(game) => {
                assert_eq!(game.opponent, "PHO");
                assert_eq!(game.opponent_link, "/teams/PHO/2025.html");
                assert_eq!(game.box_score.minutes, 37);
                assert_eq!(game.box_score.field_goals_made, 9.0);
                assert_eq!(game.box_score.field_goals_attempted, 18.0);
            }
            other => panic!("expected a played game, got {:?}", other),
        }
        assert_eq!(log.games[1], GameRow::NotPlayed);
        assert!(log.games[2].is_played());
    }

    #[test]
    fn test_parse_keeps_box_score_columns() {
        let html = page(&[played_row("2024-10-22", "MIN", "30:00", 5, 10)]);
        let log = GameLogParser::parse(&html).unwrap().unwrap();

        let GameRow::Played(game) = &log.games[0] else {
            panic!("expected a played game");
        };
        let expected = BoxScore {
            minutes: 30,
            field_goals_made: 5.0,
            field_goals_attempted: 10.0,
            threes_made: 2.0,
            threes_attempted: 5.0,
            free_throws_made: 3.0,
            free_throws_attempted: 4.0,
            rebounds: 7.0,
            assists: 8.0,
            steals: 1.0,
            blocks: 0.0,
            turnovers: 3.0,
        };
        assert_eq!(game.box_score, expected);
    }

    #[test]
    fn test_parse_skips_header_rows() {
        let html = page(&[
            played_row("2024-10-22", "MIN", "30:00", 5, 10),
            "<tr class=\"thead\"><th>Rk</th><th>G</th></tr>".to_string(),
        ]);
        let log = GameLogParser::parse(&html).unwrap().unwrap();
        assert_eq!(log.games.len(), 1);
    }

    #[test]
    fn test_parse_without_table() {
        let html = "<html><body><h1>Retired Player Game Log</h1><p>No games</p></body></html>";
        assert!(GameLogParser::parse(html).unwrap().is_none());
    }

    #[test]
    fn test_parse_empty_table() {
        let log = GameLogParser::parse(&page(&[])).unwrap().unwrap();
        assert!(log.games.is_empty());
    }
}
