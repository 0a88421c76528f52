use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use indicatif::ProgressBar;
use nba_forecast::api::BasketballReferenceClient;
use nba_forecast::config::Config;
use nba_forecast::display::output::{display_error, display_info, display_prediction, display_success};
use nba_forecast::StatProjector;

#[derive(Parser, Debug)]
#[command(name = "NBA Forecast")]
#[command(about = "Predict an NBA player's stats for their next game", long_about = None)]
struct Args {
    /// Player's full name, e.g. LeBron James
    #[arg(required = true, num_args = 1..)]
    name: Vec<String>,

    /// Season to use, named by the year it ends in (default: current season)
    #[arg(short, long)]
    season: Option<i32>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(season) = args.season {
        config.season = season;
    }

    let player = args.name.join(" ");
    display_info(&format!(
        "Projecting {} for the {} season (this makes one request per recent game)",
        player, config.season
    ));

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(0)
    };
    let client = BasketballReferenceClient::new(&config);
    let projector = StatProjector::new(config, client).with_progress(progress);

    let message = projector.try_predict_next_game(&player)?;

    display_success("Projection ready");
    display_prediction(&player, &message);

    Ok(())
}
