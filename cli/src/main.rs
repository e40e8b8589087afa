use clap::Parser;
use schoolyard_core as game;
use std::io;
use std::path::PathBuf;

use settings::{ModeChoice, Settings};

mod session;
mod settings;
mod view;

#[derive(Parser, Debug)]
#[command(version, about = "Settle it with tiles.", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with default mode and counts
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Game to play
    #[arg(short, long, value_enum)]
    mode: Option<ModeChoice>,

    /// How many players are taking part
    #[arg(short, long)]
    participants: Option<u32>,

    /// How many teams to split into (teams mode only)
    #[arg(short, long)]
    teams: Option<u32>,

    /// Pick random numbers for a quick game
    #[arg(short, long)]
    randomize: bool,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print plain text without colors
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(participants) = self.participants {
            settings.participants = participants;
        }
        if let Some(teams) = self.teams {
            settings.teams = teams;
        }
        if self.no_color {
            settings.color = false;
        }
        Ok(settings)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = args.settings()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);
    let mut rng = game::SeededRandom::seed_from_u64(seed);

    let config = if args.randomize {
        let config = game::RoundConfig::randomized(settings.mode.into(), &mut rng);
        println!(">> Numbers shuffled.");
        config
    } else {
        settings.round_config()
    };
    log::info!("starting {:?}", config);

    let mut session = session::Session::start(config, rng, settings.color)?;
    session.run(io::stdin().lock(), &mut io::stdout().lock())
}
