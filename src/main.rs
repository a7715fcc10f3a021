//! Word Scramble - CLI
//!
//! Word game with TUI and line modes, plus tools for analyzing root words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{analyze_word, run_simple, run_survey},
    config::GameConfig,
    game::Rules,
    logging::{self, LogOutput},
    output::{print_analysis_result, print_survey_result},
    wordlists::loader::load_start_words,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 's', long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Language tag words are checked in
    #[arg(short, long, global = true, default_value = "en")]
    language: String,

    /// Language a dictionary file is written in (the embedded dictionary is English)
    #[arg(long, global = true, default_value = "en")]
    dictionary_language: String,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Seed for picking root words (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without TUI
    Simple,

    /// List every word a root word yields
    Analyze {
        /// Root word to analyze
        root: String,
    },

    /// Rank all root words by the score they allow
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Number of best roots to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            start_words: self.start_words.clone(),
            dictionary: self.dictionary.clone(),
            dictionary_language: self.dictionary_language.clone(),
            rules: Rules {
                language: self.language.clone(),
                ..Rules::default()
            },
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let full_screen = matches!(command, Commands::Play);
    logging::init(&LogOutput::for_mode(full_screen, cli.log_file))
        .context("failed to open log file")?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Analyze { root } => run_analyze_command(&config, &root),
        Commands::Survey { limit, top } => run_survey_command(&config, limit, top),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let game = config.build_game().context("failed to load word lists")?;
    let app = App::new(game, config.rng());
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut game = config.build_game().context("failed to load word lists")?;
    let mut rng = config.rng();
    run_simple(&mut game, &mut rng).context("line mode failed")
}

fn run_analyze_command(config: &GameConfig, root: &str) -> Result<()> {
    let speller = config.load_speller().context("failed to load dictionary")?;
    let dictionary: Vec<&str> = speller.words_in(&config.rules.language).collect();

    let result = analyze_word(root, &dictionary, &config.rules)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_survey_command(config: &GameConfig, limit: Option<usize>, top: usize) -> Result<()> {
    let start_words =
        load_start_words(&config.start_words).context("failed to load root words")?;
    let speller = config.load_speller().context("failed to load dictionary")?;
    let dictionary: Vec<&str> = speller.words_in(&config.rules.language).collect();

    let count = limit.map_or(start_words.len(), |n| n.min(start_words.len()));
    println!("🔎 Surveying {count} root words...");

    let result = run_survey(&start_words, &dictionary, &config.rules, limit);
    print_survey_result(&result, top);
    Ok(())
}
