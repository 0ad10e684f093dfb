//! League Simulator CLI
//!
//! Interactive season play, headless full-season runs and save listing.

mod config;
mod display;
mod prompt;
mod session;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use config::CliConfig;
use display::{LeaderboardsView, StandingsView};
use league_core::{rng, League, MatchEngine, SaveManager, DEFAULT_LEADERBOARD_LIMIT};
use prompt::{parse_team_names, Prompter};
use session::Session;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "league-sim")]
#[command(about = "Round-robin football league simulator", long_about = None)]
struct Cli {
    /// YAML config file (league name, save directory, seed, engine model)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding save files
    #[arg(long, global = true)]
    save_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a season interactively
    Play {
        /// Comma-separated team names for a new league
        #[arg(long)]
        teams: Option<String>,

        /// Seed for a reproducible season
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Simulate a whole season without prompts
    Run {
        /// Comma-separated team names (2-20)
        #[arg(long)]
        teams: String,

        /// Seed for a reproducible season
        #[arg(long)]
        seed: Option<u64>,

        /// Save the finished season
        #[arg(long)]
        save: bool,
    },

    /// List save files, oldest first
    Saves,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    ctrlc::set_handler(|| {
        println!("\nExiting...");
        std::process::exit(0);
    })
    .context("installing Ctrl-C handler")?;

    match cli.command {
        Commands::Play { teams, seed } => {
            let config = CliConfig::resolve(cli.config.as_deref(), seed, cli.save_dir)?;
            let preset_teams = teams.as_deref().map(teams_arg).transpose()?;
            let stdin = io::stdin();
            let session = Session {
                prompter: Prompter::new(stdin.lock(), io::stdout()),
                saves: SaveManager::new(&config.save_dir),
                engine: MatchEngine::new(config.engine)?,
                rng: seeded_rng(config.seed),
                league_name: config.league_name,
                preset_teams,
            };
            session.run()?;
        }

        Commands::Run { teams, seed, save } => {
            let config = CliConfig::resolve(cli.config.as_deref(), seed, cli.save_dir)?;
            let names = teams_arg(&teams)?;
            let engine = MatchEngine::new(config.engine)?;
            let mut rng = seeded_rng(config.seed);

            let mut league = League::with_default_squads(config.league_name, &names, &mut rng)?;
            league.generate_fixtures(&mut rng);
            league.simulate_season(&engine, &mut rng)?;

            println!("🏆 {} finished after {} matchdays", league.name, league.current_matchday);
            print!("{}", StandingsView(&league));
            print!("{}", LeaderboardsView { league: &league, limit: DEFAULT_LEADERBOARD_LIMIT });

            if save {
                let path = SaveManager::new(&config.save_dir)
                    .save(&league)
                    .context("saving finished season")?;
                println!("\n💾 Season saved to: {}", path.display());
            }
        }

        Commands::Saves => {
            let config = CliConfig::resolve(cli.config.as_deref(), None, cli.save_dir)?;
            let saves = SaveManager::new(&config.save_dir).list_saves()?;
            if saves.is_empty() {
                println!("No saves in {}", config.save_dir.display());
            }
            for (i, path) in saves.iter().enumerate() {
                let marker = if i + 1 == saves.len() { "  (latest)" } else { "" };
                println!("{}{}", path.display(), marker);
            }
        }
    }

    Ok(())
}

fn teams_arg(raw: &str) -> Result<Vec<String>> {
    parse_team_names(raw).map_err(|problem| anyhow!("--teams: {}", problem))
}

fn seeded_rng(seed: Option<u64>) -> rng::SimRng {
    let seed = seed.unwrap_or_else(rng::fresh_seed);
    log::info!("Using seed {}", seed);
    rng::seeded(seed)
}
