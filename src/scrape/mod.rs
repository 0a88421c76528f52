//! HTML parsers for basketball-reference.com pages.
//!
//! Column positions and block labels live here and nowhere else; everything
//! downstream works on the types in `api::models`.

pub mod game_log;
pub mod player_page;
pub mod schedule;
pub mod team_page;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

pub use game_log::GameLogParser;
pub use player_page::PlayerPageParser;
pub use schedule::ScheduleParser;
pub use team_page::TeamPageParser;

pub(crate) static TBODY: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody").unwrap());
pub(crate) static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
pub(crate) static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
pub(crate) static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>()
}

/// Href and text of the first link inside `element`.
pub(crate) fn first_link(element: &ElementRef) -> Option<(String, String)> {
    let link = element.select(&LINK).next()?;
    let href = link.value().attr("href")?.to_string();
    Some((href, element_text(&link).trim().to_string()))
}
