use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::element_text;

static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());

/// How a candidate game-log page relates to the player being searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMatch {
    /// First and last name both match.
    Player,
    /// Same surname, different first name: try the next disambiguation index.
    Namesake,
    /// The page is not a player page for this surname at all.
    NotAPlayer,
}

pub struct PlayerPageParser;

impl PlayerPageParser {
    /// Lower-cased words of the first `<h1>`.
    pub fn header_words(html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&HEADING)
            .next()
            .map(|h1| {
                element_text(&h1)
                    .to_lowercase()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `first` and `last` are expected lower-cased.
    pub fn match_header(html: &str, first: &str, last: &str) -> HeaderMatch {
        let words = Self::header_words(html);
        match (words.first(), words.get(1)) {
            (Some(header_first), Some(header_last)) if header_last == last => {
                if header_first == first {
                    HeaderMatch::Player
                } else {
                    HeaderMatch::Namesake
                }
            }
            _ => HeaderMatch::NotAPlayer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body><div id="info"><h1>
        <span>Anthony Davis 2024-25 Game Log</span>
    </h1></div></body></html>"#;

    #[test]
    fn test_header_words() {
        let words = PlayerPageParser::header_words(PAGE);
        assert_eq!(&words[..3], &["anthony", "davis", "2024-25"]);
    }

    #[test]
    fn test_match_header() {
        assert_eq!(PlayerPageParser::match_header(PAGE, "anthony", "davis"), HeaderMatch::Player);
        assert_eq!(PlayerPageParser::match_header(PAGE, "andrew", "davis"), HeaderMatch::Namesake);
        assert_eq!(PlayerPageParser::match_header(PAGE, "anthony", "edwards"), HeaderMatch::NotAPlayer);
    }

    #[test]
    fn test_match_header_without_heading() {
        assert_eq!(
            PlayerPageParser::match_header("<html><body></body></html>", "a", "b"),
            HeaderMatch::NotAPlayer
        );
    }
}
