// Path builders for basketball-reference.com. Paths are site-relative so the
// same strings work with links scraped from the pages themselves.

/// `/players/j/jamesle01/gamelog/2025`. Player ids only use the letters of
/// the name, so punctuation such as the apostrophe in "o'neale" is skipped.
pub fn player_game_log_path(last: &str, first: &str, index: u32, season: i32) -> String {
    let letters = |name: &str, n: usize| -> String {
        name.chars().filter(|c| c.is_alphanumeric()).take(n).collect()
    };
    let initial = letters(last, 1);
    let last_part = letters(last, 5);
    let first_part = letters(first, 2);
    format!(
        "/players/{}/{}{}{:02}/gamelog/{}",
        initial, last_part, first_part, index, season
    )
}

/// `/teams/BOS/2025_games.html`
pub fn team_schedule_path(team: &str, season: i32) -> String {
    format!("/teams/{}/{}_games.html", team, season)
}

pub fn absolute_url(site: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", site.trim_end_matches('/'), path)
    }
}
