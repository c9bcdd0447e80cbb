use std::path::PathBuf;

use anyhow::Context;
use boggle::{roll_board_of_size, Board, GameSession};
use clap::Parser;
use judge::{load_dictionary, play_game, spawn_line_reader, GameConfig, Protocol, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to a JSON file with the game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the word list, one word per line (overrides the config file)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Play on this board instead of a random one, with rows separated by "/", e.g. "CATS/DOGE/QUIT/ABCD"
    #[arg(short, long)]
    board: Option<String>,

    /// RNG seed for the random board
    #[arg(long)]
    seed: Option<u64>,

    /// Time limit in seconds, 0 for none (overrides the config file)
    #[arg(short, long)]
    time_limit: Option<u64>,

    /// Record the game's requests as a JSON file into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// How paths are submitted on stdin
    #[arg(short, long, value_enum, default_value_t = Protocol::Text)]
    protocol: Protocol,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(dictionary) = args.dictionary {
        config.dictionary = dictionary;
    }
    if let Some(time_limit) = args.time_limit {
        config.time_limit_secs = time_limit;
    }

    let dictionary = load_dictionary(&config.dictionary)?;
    info!(
        num_words = dictionary.len(),
        path = %config.dictionary.display(),
        "Loaded dictionary"
    );

    let (board, seed) = match &args.board {
        Some(board) => {
            let board = board
                .parse::<Board>()
                .with_context(|| format!("Invalid board '{}'", board))?;
            (board, None)
        }
        None => {
            // Get a random seed
            let seed = args.seed.unwrap_or_else(rand::random);
            info!(seed);
            let mut rng = StdRng::seed_from_u64(seed);
            (roll_board_of_size(&mut rng, config.board_size), Some(seed))
        }
    };

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path, &board, seed)?)
    } else {
        None
    };

    let mut session = GameSession::new(board, &dictionary);
    info!(
        num_words = session.num_realizable_words(),
        time_limit_secs = config.time_limit_secs,
        "Board is ready"
    );

    let mut stdout = std::io::stdout().lock();
    if args.protocol == Protocol::Text {
        use std::io::Write;
        writeln!(stdout, "{}", session.board())?;
        writeln!(
            stdout,
            "Enter paths as row,col pairs (e.g. \"0,0 0,1 1,1\"), \"status\" or \"quit\"."
        )?;
    }

    let input = spawn_line_reader();
    play_game(
        &mut session,
        &input,
        &mut stdout,
        args.protocol,
        config.time_limit(),
        &mut recorder,
    )?;

    if let Some(rec) = recorder {
        rec.write_game_recording()?;
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
