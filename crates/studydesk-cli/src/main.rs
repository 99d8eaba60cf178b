//! studydesk CLI: truth-table quizzes and flashcard reviews in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use studydesk_core::model::Difficulty;

mod commands;
mod input;
mod render;

#[derive(Parser)]
#[command(
    name = "studydesk",
    version,
    about = "Truth-table quizzes and flashcard reviews"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config, sample tables, and a sample card set
    Init,

    /// List available truth tables
    Tables {
        /// Only this difficulty (easy, normal, hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Play a truth-table quiz
    Play {
        /// Difficulty level (easy, normal, hard)
        #[arg(long)]
        difficulty: Difficulty,

        /// Player name for the leaderboard (prompted for if omitted)
        #[arg(long)]
        player: Option<String>,

        /// Seed for table choice and blanking
        #[arg(long)]
        seed: Option<u64>,

        /// Play this CSV table instead of a random one
        #[arg(long)]
        table: Option<PathBuf>,

        /// Do not write the score to history
        #[arg(long)]
        dry_run: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show leaderboards
    Leaderboard {
        /// Only this difficulty (easy, normal, hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List flashcard sets
    Sets {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a flashcard set, or add cards to an existing one
    CreateSet {
        /// Set name
        #[arg(long)]
        name: String,

        /// Card as "question=answer" (repeatable)
        #[arg(long = "card")]
        cards: Vec<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Delete a flashcard set
    DeleteSet {
        /// Set name
        #[arg(long)]
        name: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Review a flashcard set
    Review {
        /// Set name
        #[arg(long)]
        set: String,

        /// Seed for card order
        #[arg(long)]
        seed: Option<u64>,

        /// Keep cards in stored order
        #[arg(long)]
        no_shuffle: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show past flashcard reviews
    History {
        /// Only this set
        #[arg(long)]
        set: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("studydesk=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Tables { difficulty, config } => commands::tables::execute(difficulty, config),
        Commands::Play {
            difficulty,
            player,
            seed,
            table,
            dry_run,
            config,
        } => commands::play::execute(difficulty, player, seed, table, dry_run, config).await,
        Commands::Leaderboard {
            difficulty,
            format,
            config,
        } => commands::leaderboard::execute(difficulty, format, config),
        Commands::Sets { config } => commands::sets::list(config),
        Commands::CreateSet {
            name,
            cards,
            config,
        } => commands::sets::create(name, cards, config),
        Commands::DeleteSet { name, config } => commands::sets::delete(name, config),
        Commands::Review {
            set,
            seed,
            no_shuffle,
            config,
        } => commands::review::execute(set, seed, no_shuffle, config).await,
        Commands::History { set, config } => commands::review::history(set, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
