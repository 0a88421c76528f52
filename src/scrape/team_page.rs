use crate::api::models::OpponentRatings;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use super::{element_text, LINK};

static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static RANK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d{1,2})").unwrap());

const RATINGS_LABEL: &str = "Off Rtg";
const PACE_LABEL: &str = "SRS";

// Line positions within the labeled blocks that are not used.
const NET_RATING_LINE: usize = 2;
const SRS_LINE: usize = 0;

pub struct TeamPageParser;

impl TeamPageParser {
    /// Offensive, defensive and pace ranks from a team season page.
    ///
    /// The ranks sit in the "(8th of 30)" suffix of the "Off Rtg" block
    /// (offense, defense, net) and the "SRS" block (SRS, pace). Returns `None`
    /// when either block is missing or a rank cannot be read.
    pub fn parse_ratings(html: &str) -> Option<OpponentRatings> {
        let document = Html::parse_document(html);

        let mut ratings_lines = None;
        let mut pace_lines = None;
        for paragraph in document.select(&PARAGRAPH) {
            let Some(label) = paragraph.select(&LINK).next().map(|a| element_text(&a)) else {
                continue;
            };
            match label.trim() {
                RATINGS_LABEL if ratings_lines.is_none() => {
                    ratings_lines = Some(Self::lines(&element_text(&paragraph)));
                }
                PACE_LABEL if pace_lines.is_none() => {
                    pace_lines = Some(Self::lines(&element_text(&paragraph)));
                }
                _ => {}
            }
        }

        let (Some(mut ratings_lines), Some(mut pace_lines)) = (ratings_lines, pace_lines) else {
            debug!("team page is missing the ratings or SRS block");
            return None;
        };
        if ratings_lines.len() <= NET_RATING_LINE || pace_lines.len() <= SRS_LINE {
            return None;
        }
        ratings_lines.remove(NET_RATING_LINE);
        pace_lines.remove(SRS_LINE);

        let ranks = ratings_lines
            .iter()
            .chain(pace_lines.iter())
            .map(|line| Self::rank(line))
            .collect::<Option<Vec<u32>>>()?;

        match ranks[..] {
            [offense, defense, pace, ..] => Some(OpponentRatings::new(offense, defense, pace)),
            _ => None,
        }
    }

    fn lines(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn rank(line: &str) -> Option<u32> {
        RANK.captures(line)?.get(1)?.as_str().parse().ok()
    }
}
