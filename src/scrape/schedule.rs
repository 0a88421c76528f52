use crate::api::models::NextOpponent;
use scraper::Html;

use super::{element_text, first_link, CELL, ROW, TBODY};

// Data-cell positions in the team schedule table.
const OPPONENT_COL: usize = 5;
const RESULT_COL: usize = 6;

pub struct ScheduleParser;

impl ScheduleParser {
    /// First game in the schedule without a result, i.e. the next one to be played.
    pub fn next_opponent(html: &str) -> Option<NextOpponent> {
        let document = Html::parse_document(html);
        let table = document.select(&TBODY).next()?;

        table
            .select(&ROW)
            .map(|row| row.select(&CELL).collect::<Vec<_>>())
            .filter(|data| data.len() > RESULT_COL)
            .find(|data| element_text(&data[RESULT_COL]).trim().is_empty())
            .and_then(|data| first_link(&data[OPPONENT_COL]))
            .map(|(link, name)| NextOpponent { link, name })
    }
}
