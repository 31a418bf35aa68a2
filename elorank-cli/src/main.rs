mod config;
mod discover;
mod output;
mod parse;
mod prompt;
mod session;

use clap::Parser;
use elorank_core::constants::{DEFAULT_BASE_RATING, DEFAULT_K_FACTOR, DEFAULT_STATE_FILE};
use elorank_core::{EngineConfig, RankingEngine, RatingStore};
use log::{error, info};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::ElorankConfig;
use crate::discover::{discover_items, DEFAULT_EXTENSIONS};
use crate::session::{run_session, unix_now, SessionOptions};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    error!("{msg}");
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "elorank", version, about = "Rank images by pairwise preference using ELO ratings")]
struct Cli {
    /// Show debug logging (RUST_LOG overrides) and, when ranking, the
    /// leaderboard after every decision
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Compare images two at a time and update their ratings
    Rank(RankArgs),
    /// Print the current ratings
    Leaderboard(LeaderboardArgs),
    /// Create a default config file at ~/.config/elorank/config.toml
    Init {
        /// Where to write the config (default: ~/.config/elorank/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct SourceArgs {
    /// Directory containing the images
    image_directory: PathBuf,

    /// State file (default: elo_image_results.json inside the image directory,
    /// not the working directory). Relative paths resolve against the image
    /// directory, so pass an absolute path to reuse a file from elsewhere.
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Base ELO rating for images never compared before
    #[arg(long)]
    base_rating: Option<i64>,

    /// Path to config file (default: ~/.config/elorank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(clap::Args)]
struct RankArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Maximum rating change per comparison
    #[arg(long)]
    k_factor: Option<f64>,
}

#[derive(clap::Args)]
struct LeaderboardArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output JSON instead of table
    #[arg(long)]
    json: bool,
}

/// Everything a command needs once config file and CLI args are merged.
struct Resolved {
    dir: PathBuf,
    items: Vec<String>,
    store: RatingStore,
    engine_config: EngineConfig,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Relative state file paths are resolved against the image directory.
fn resolve_state_path(dir: &Path, state_file: Option<PathBuf>) -> PathBuf {
    let path = state_file.unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE));
    if path.is_absolute() {
        path
    } else {
        dir.join(path)
    }
}

fn resolve(source: &SourceArgs, k_factor: Option<f64>) -> Resolved {
    let config_path = source.config.clone().unwrap_or_else(config::config_path);
    let cfg: ElorankConfig = config::load_config(&config_path);

    let dir = source.image_directory.clone();
    let extensions: Vec<String> = cfg
        .extensions
        .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect());

    let items = discover_items(&dir, &extensions)
        .unwrap_or_else(|e| bail(format!("Failed to list {}: {e}", dir.display())));

    let state_path = resolve_state_path(&dir, source.state_file.clone().or(cfg.state_file));

    let engine_config = EngineConfig {
        base_rating: source.base_rating.or(cfg.base_rating).unwrap_or(DEFAULT_BASE_RATING),
        k_factor: k_factor.or(cfg.k_factor).unwrap_or(DEFAULT_K_FACTOR),
    };
    if let Err(e) = engine_config.validate() {
        bail(e);
    }

    info!(
        "{} items in {}, state file {}",
        items.len(),
        dir.display(),
        state_path.display()
    );

    Resolved {
        dir,
        items,
        store: RatingStore::new(state_path),
        engine_config,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Rank(args) => run_rank(args, cli.verbose),
        Commands::Leaderboard(args) => run_leaderboard(args),
        Commands::Init { config } => {
            let path = config.unwrap_or_else(config::config_path);
            config::create_default_config(&path);
            println!("Created config at {}", path.display());
            println!("Edit it to set your default base rating, K-factor, etc.");
        }
    }
}

/// Verbose sessions print the full leaderboard after every decision.
fn session_options(dir: PathBuf, verbose: bool) -> SessionOptions {
    SessionOptions {
        dir,
        show_leaderboard: verbose,
    }
}

fn run_rank(args: RankArgs, verbose: bool) {
    let resolved = resolve(&args.source, args.k_factor);

    if resolved.items.len() < 2 {
        bail(format!(
            "Need at least 2 images to compare in {}, found {}",
            resolved.dir.display(),
            resolved.items.len()
        ));
    }

    let state = resolved
        .store
        .load(&resolved.items, resolved.engine_config.base_rating)
        .unwrap_or_else(|e| bail(e));
    let mut engine = RankingEngine::new(resolved.items, state, resolved.engine_config)
        .unwrap_or_else(|e| bail(e));

    eprintln!(
        "Ranking {} images ({} comparisons so far). State: {}",
        engine.item_ids().len(),
        engine.state().comparison_count(),
        resolved.store.path().display(),
    );

    let options = session_options(resolved.dir, verbose);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut rng = rand::rng();

    let decided = run_session(
        &mut engine,
        &resolved.store,
        &options,
        stdin.lock(),
        &mut stdout,
        &mut rng,
        unix_now,
    )
    .unwrap_or_else(|e| bail(e));

    eprintln!(
        "Recorded {decided} comparisons this session ({} total).",
        engine.state().comparison_count()
    );
}

fn run_leaderboard(args: LeaderboardArgs) {
    let resolved = resolve(&args.source, None);

    let state = resolved
        .store
        .load(&resolved.items, resolved.engine_config.base_rating)
        .unwrap_or_else(|e| bail(e));
    let rankings = state.leaderboard();

    if args.json {
        let json = output::render_json(&rankings, state.comparison_count())
            .unwrap_or_else(|e| bail(format!("Failed to serialize leaderboard: {e}")));
        println!("{json}");
    } else {
        print!("{}", output::render_table(&rankings, state.comparison_count()));
    }
}
