mod config;
mod output;
mod parse;
mod render;
mod store;

use clap::Parser;
use huepick_core::constants::{DEFAULT_BATCH_SIZE, DEFAULT_MAX_ROUNDS};
use huepick_core::{ColorId, PickSession, SessionConfig, SessionSettings};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::parse::Decision;
use crate::store::SavedSession;

/// Pool size when neither flag nor config says otherwise.
const DEFAULT_POOL_SIZE: usize = 24;
/// Result list length when neither flag nor config says otherwise.
const DEFAULT_TOP: usize = 10;
const DEFAULT_SESSION_FILE: &str = "huepick-session.json";

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "huepick",
    version,
    about = "Find your favorite colors through quick side-by-side picks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run an interactive picking session
    Pick(PickArgs),
    /// Print the current ranking from a saved session
    Top(TopArgs),
    /// Create a default config file at ~/.config/huepick/config.toml
    Init,
}

#[derive(Parser)]
struct PickArgs {
    /// Size of the generated candidate pool
    #[arg(long)]
    colors: Option<usize>,

    /// Comparison rounds before the session completes
    #[arg(long)]
    rounds: Option<usize>,

    /// Swatches shown per round
    #[arg(long)]
    batch_size: Option<usize>,

    /// Session state file to resume from and save to
    #[arg(long)]
    session: Option<PathBuf>,

    /// How many colors the final ranking lists
    #[arg(long)]
    top: Option<usize>,

    /// Output JSON instead of a table on completion
    #[arg(long)]
    json: bool,

    /// Write the top colors as hex lines on completion
    #[arg(long)]
    export: Option<PathBuf>,

    /// Seed for a fully reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Plain output without ANSI colors
    #[arg(long)]
    ascii: bool,

    /// Path to config file (default: ~/.config/huepick/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show round-by-round diagnostics
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser)]
struct TopArgs {
    /// Session state file to read
    #[arg(long)]
    session: Option<PathBuf>,

    /// How many colors to list
    #[arg(long)]
    top: Option<usize>,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write the listed colors as hex lines
    #[arg(long)]
    export: Option<PathBuf>,

    /// Plain output without ANSI colors
    #[arg(long)]
    ascii: bool,

    /// Path to config file (default: ~/.config/huepick/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pick(args) => run_pick(args),
        Commands::Top(args) => run_top(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default pool size, rounds, etc.");
        }
    }
}

/// `-v` turns on debug-level diagnostics; HUEPICK_LOG overrides everything.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("HUEPICK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn build_session(config: SessionConfig, seed: Option<u64>) -> PickSession {
    let session = match seed {
        Some(seed) => PickSession::with_seed(config, seed),
        None => PickSession::new(config),
    };
    session.unwrap_or_else(|e| bail(e))
}

fn save_session(path: &Path, session: &PickSession) {
    let saved = SavedSession {
        max_rounds: session.max_rounds(),
        palette: session.items().to_vec(),
        snapshot: session.snapshot(),
    };
    store::save(path, &saved)
        .unwrap_or_else(|e| bail(format!("Failed to save session to {}: {e}", path.display())));
}

fn print_results(session: &PickSession, top: usize, json: bool, ascii: bool) {
    if json {
        output::print_json(session, top);
    } else {
        output::print_table(session, top, ascii);
        output::print_summary(session.analytics());
    }
}

fn export_if_requested(session: &PickSession, top: usize, export: &Option<PathBuf>) {
    if let Some(path) = export {
        output::export_palette(session, top, path).unwrap_or_else(|e| {
            bail(format!("Failed to write palette to {}: {e}", path.display()))
        });
        println!("Palette written to {}", path.display());
    }
}

fn print_help() {
    println!("Commands:");
    println!("  1 3 5   pick swatches 1, 3 and 5 as this round's favorites");
    println!("  p       pass — nothing here appeals");
    println!("  s       save the session and keep going");
    println!("  q       save and quit");
    println!("  h       this help");
}

fn log_transitions(session: &PickSession, active_before: usize, favorites_before: usize) {
    let favorites_gained = session.favorites().len().saturating_sub(favorites_before);
    let eliminated_gained = active_before.saturating_sub(session.active_count() + favorites_gained);
    if favorites_gained > 0 {
        tracing::debug!(active = session.active_count(), "favorite promoted");
    }
    if eliminated_gained > 0 {
        tracing::debug!(
            culled = eliminated_gained,
            active = session.active_count(),
            "elimination pass"
        );
    }
}

fn run_pick(args: PickArgs) {
    init_logging(args.verbose);

    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let colors = args.colors.or(cfg.colors).unwrap_or(DEFAULT_POOL_SIZE);
    let batch_size = args
        .batch_size
        .or(cfg.batch_size)
        .unwrap_or(DEFAULT_BATCH_SIZE);
    let top = args.top.or(cfg.top).unwrap_or(DEFAULT_TOP);
    let session_path = args
        .session
        .clone()
        .or_else(|| cfg.session.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

    let mut session = if session_path.exists() {
        let saved = store::load(&session_path).unwrap_or_else(|e| bail(e));
        let max_rounds = args.rounds.or(cfg.rounds).unwrap_or(saved.max_rounds);
        tracing::debug!(path = %session_path.display(), "resuming saved session");
        let session_config = SessionConfig {
            items: Some(saved.palette.clone()),
            generate_items: false,
            item_count: 0,
            max_rounds,
            settings: SessionSettings { batch_size },
        };
        let mut session = build_session(session_config, args.seed);
        session.restore(&saved.snapshot);
        session
    } else {
        let max_rounds = args.rounds.or(cfg.rounds).unwrap_or(DEFAULT_MAX_ROUNDS);
        tracing::debug!(colors, max_rounds, batch_size, "starting fresh session");
        let session_config = SessionConfig {
            items: None,
            generate_items: true,
            item_count: colors,
            max_rounds,
            settings: SessionSettings { batch_size },
        };
        build_session(session_config, args.seed)
    };

    while !session.is_complete() {
        let batch_ids: Vec<ColorId> = session.evaluating().to_vec();
        let round = session.analytics().session_comparisons + 1;
        render::print_batch(
            &session.current_batch(),
            round,
            session.max_rounds(),
            args.ascii,
        );

        print!("> ");
        io::stdout().flush().ok();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                // End of input: keep the progress.
                save_session(&session_path, &session);
                println!("\nSession saved to {}", session_path.display());
                return;
            }
            Ok(_) => {}
            Err(e) => bail(format!("Failed to read input: {e}")),
        }

        match parse::parse_decision(&line, batch_ids.len()) {
            Ok(Decision::Pick(positions)) => {
                let picked: Vec<ColorId> = positions.iter().map(|&p| batch_ids[p - 1]).collect();
                let active_before = session.active_count();
                let favorites_before = session.favorites().len();
                session.pick(&picked);
                log_transitions(&session, active_before, favorites_before);
            }
            Ok(Decision::Pass) => {
                let active_before = session.active_count();
                let favorites_before = session.favorites().len();
                session.pass();
                log_transitions(&session, active_before, favorites_before);
            }
            Ok(Decision::Save) => {
                save_session(&session_path, &session);
                println!("Saved to {}", session_path.display());
            }
            Ok(Decision::Quit) => {
                save_session(&session_path, &session);
                println!("Saved to {}", session_path.display());
                return;
            }
            Ok(Decision::Help) => print_help(),
            Err(message) => println!("{message}"),
        }
    }

    println!();
    print_results(&session, top, args.json, args.ascii);
    export_if_requested(&session, top, &args.export);
    save_session(&session_path, &session);
    println!("\nSession saved to {}", session_path.display());
}

fn run_top(args: TopArgs) {
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let top = args.top.or(cfg.top).unwrap_or(DEFAULT_TOP);
    let session_path = args
        .session
        .clone()
        .or_else(|| cfg.session.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

    if !session_path.exists() {
        bail(format!(
            "No session file at {}. Run `huepick pick` first.",
            session_path.display()
        ));
    }

    let saved = store::load(&session_path).unwrap_or_else(|e| bail(e));
    let session_config = SessionConfig {
        items: Some(saved.palette.clone()),
        generate_items: false,
        item_count: 0,
        max_rounds: saved.max_rounds,
        settings: SessionSettings::default(),
    };
    let mut session = PickSession::new(session_config).unwrap_or_else(|e| bail(e));
    session.restore(&saved.snapshot);

    print_results(&session, top, args.json, args.ascii);
    export_if_requested(&session, top, &args.export);
}
