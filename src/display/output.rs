use crate::analysis::minutes::MissedGamesProfile;
use crate::analysis::predictor::PredictionSet;
use crate::analysis::stats::Stat;
use colored::*;

/// The text shown for a successful projection: at most one missed-games
/// warning, then the matchup, then the projected line.
pub fn format_prediction(missed: &MissedGamesProfile, stats: &PredictionSet) -> String {
    let player = &stats.player;
    let mut message = String::new();

    if missed.missed_last_five {
        message += &format!(
            "{} has missed their last 5 games, so they might be injured. Either way, the prediction might be less accurate with less recent data.\n\n",
            player
        );
    } else if missed.missed_ten_of_last_fifteen {
        message += &format!(
            "{} has missed 10 of their last 15 games, so the prediction might be less accurate with less recent data.\n\n",
            player
        );
    } else if missed.missed_fifteen_of_last_thirty {
        message += &format!(
            "{} has missed 15 of their last 30 games (or however many have been played so far), so the prediction might be less accurate with less data.\n\n",
            player
        );
    } else if missed.missed_last_game {
        message += &format!(
            "{} missed their last game, so they might not play the next one. Regardless, here is the prediction: \n",
            player
        );
    }

    message += &format!(
        "{} of the {} is projected to play {} minutes against the {}",
        player, stats.team, stats.minutes, stats.opponent
    );
    message += &format!(
        ", who have current offensive, defensive and pace ratings of {}, {} and {} respectively.",
        stats.ratings.offense, stats.ratings.defense, stats.ratings.pace
    );
    message += &format!(
        " Based on these values and past stats for {}, their predicted stats for the upcoming game are: \n",
        player
    );
    message += &format!(
        "{} pts, {} rbs, {} asts, {} stls, {} blks, {} tovs",
        stats.points(),
        stats.get(Stat::Rebounds),
        stats.get(Stat::Assists),
        stats.get(Stat::Steals),
        stats.get(Stat::Blocks),
        stats.get(Stat::Turnovers)
    );
    message += &format!(
        " on {}/{} fgs, {}/{} 3ps and {}/{} fts.",
        stats.get(Stat::FieldGoalsMade),
        stats.get(Stat::FieldGoalsAttempted),
        stats.get(Stat::ThreesMade),
        stats.get(Stat::ThreesAttempted),
        stats.get(Stat::FreeThrowsMade),
        stats.get(Stat::FreeThrowsAttempted)
    );

    message
}

pub fn display_prediction(player: &str, message: &str) {
    println!(
        "\n{}",
        format!("🏀 Next Game Projection for {}", player).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());
    println!("{}\n", message);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
