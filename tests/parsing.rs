use std::fs;
use std::path::PathBuf;

use nba_forecast::api::models::{GameRow, OpponentRatings};
use nba_forecast::scrape::player_page::HeaderMatch;
use nba_forecast::scrape::{GameLogParser, PlayerPageParser, ScheduleParser, TeamPageParser};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_game_log_fixture() {
    let raw = read_fixture("test_player_gamelog.html");
    let log = GameLogParser::parse(&raw)
        .expect("fixture should parse")
        .expect("fixture has a game table");

    assert_eq!(log.team, "LAL");
    // Repeated header row dropped, inactive row kept
    assert_eq!(log.games.len(), 7);
    assert!(!log.games[3].is_played());

    let GameRow::Played(latest) = &log.games[0] else {
        panic!("most recent game should be played");
    };
    assert_eq!(latest.opponent, "PHO");
    assert_eq!(latest.opponent_link, "/teams/PHO/2025.html");
    assert_eq!(latest.box_score.minutes, 33);
    assert_eq!(latest.box_score.field_goals_made, 10.0);
    assert_eq!(latest.box_score.field_goals_attempted, 20.0);
    assert_eq!(latest.box_score.threes_attempted, 8.0);
    assert_eq!(latest.box_score.rebounds, 8.0);
    assert_eq!(latest.box_score.blocks, 2.0);

    let minutes: Vec<Option<u32>> = log
        .games
        .iter()
        .map(|row| match row {
            GameRow::Played(game) => Some(game.box_score.minutes),
            GameRow::NotPlayed => None,
        })
        .collect();
    assert_eq!(
        minutes,
        vec![Some(33), Some(31), Some(36), None, Some(28), Some(33), Some(30)]
    );
}

#[test]
fn game_log_header_names_the_player() {
    let raw = read_fixture("test_player_gamelog.html");
    assert_eq!(
        PlayerPageParser::match_header(&raw, "test", "player"),
        HeaderMatch::Player
    );
    assert_eq!(
        PlayerPageParser::match_header(&raw, "toby", "player"),
        HeaderMatch::Namesake
    );
}

#[test]
fn parses_schedule_fixture() {
    let raw = read_fixture("lal_schedule.html");
    let next = ScheduleParser::next_opponent(&raw).expect("fixture has unplayed games");
    assert_eq!(next.name, "Sacramento Kings");
    assert_eq!(next.link, "/teams/SAC/2025.html");
}

#[test]
fn parses_team_page_fixture() {
    let raw = read_fixture("team_page.html")
        .replace("{team}", "Boston Celtics")
        .replace("{offense}", "2nd of 30")
        .replace("{defense}", "7th of 30")
        .replace("{pace}", "24th of 30");

    assert_eq!(
        TeamPageParser::parse_ratings(&raw),
        Some(OpponentRatings::new(2, 7, 24))
    );
}
