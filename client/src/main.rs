mod config;
mod console;
mod menu;

use std::io;

use clap::Parser;
use noughts_common::games::tictactoe::{TicTacToeSession, TicTacToeSessionSettings};
use noughts_common::leaderboard::ContentLeaderboardStore;
use noughts_common::{log, logger};

use config::get_config_manager;
use console::Console;
use menu::Menu;

#[derive(Parser)]
#[command(name = "noughts", about = "Noughts and crosses against a rule-based bot")]
struct Args {
    /// Config file to use instead of the one next to the executable.
    #[arg(long)]
    config: Option<String>,
    /// Leaderboard file, overrides the config.
    #[arg(long)]
    leaderboard: Option<String>,
    /// Seed for the bot's random moves, overrides the config.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = if args.use_log_prefix || config.logging.use_prefix {
        Some("Noughts".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.logging.level);

    let leaderboard_path = args
        .leaderboard
        .unwrap_or_else(|| config.leaderboard.path.clone());
    let mut settings = TicTacToeSessionSettings::from(&config.bot);
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    log!("Starting with leaderboard at {}", leaderboard_path);

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let session = TicTacToeSession::new(settings);
    let store = ContentLeaderboardStore::from_json_file(leaderboard_path);

    let mut menu = Menu::new(console, session, store);
    menu.run();
    if menu.total_score() != 0 {
        log!("Exiting with {} unsaved points", menu.total_score());
    }

    Ok(())
}
