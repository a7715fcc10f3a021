//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Any line that is not a command is submitted as a
//! word.

use crate::game::{Submission, WordScramble};
use crate::output::formatters::{score_badge, spaced_letters};
use crate::speller::SpellChecker;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Player command recognized by the line mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Words,
    Help,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            ":q" | ":quit" | ":exit" => Some(Self::Quit),
            ":n" | ":new" => Some(Self::NewGame),
            ":w" | ":words" => Some(Self::Words),
            ":h" | ":help" | "?" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Run the line mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: SpellChecker, R: Rng + ?Sized>(
    game: &mut WordScramble<S>,
    rng: &mut R,
) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, rng, stdin.lock(), stdout.lock())
}

/// Run the line mode against arbitrary input and output streams
///
/// Starts a new game, then reads until end of input or `:quit`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<S, R, I, O>(
    game: &mut WordScramble<S>,
    rng: &mut R,
    input: I,
    mut output: O,
) -> io::Result<()>
where
    S: SpellChecker,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n{}", "═".repeat(60).cyan())?;
    writeln!(output, " {} ", "WORD SCRAMBLE".bright_cyan().bold())?;
    writeln!(output, "{}", "═".repeat(60).cyan())?;
    writeln!(
        output,
        "Make words from the letters of the root word. Type {} for commands.",
        ":help".bright_yellow()
    )?;

    game.new_game_with(rng);
    print_root(game, &mut output)?;

    for line in input.lines() {
        let line = line?;

        match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::NewGame) => {
                game.new_game_with(rng);
                writeln!(output, "\n🔄 New game started!")?;
                print_root(game, &mut output)?;
            }
            Some(Command::Words) => print_words(game, &mut output)?,
            Some(Command::Help) => print_help(&mut output)?,
            None => match game.submit(&line) {
                Ok(Submission::Empty) => {}
                Ok(Submission::Accepted { word, points }) => {
                    writeln!(
                        output,
                        "{} {} {}   score: {}",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        format!("+{points}").green(),
                        game.score().to_string().bright_yellow()
                    )?;
                }
                Err(error) => {
                    writeln!(
                        output,
                        "{} {}: {}",
                        "✗".red().bold(),
                        error.title().red().bold(),
                        error.message()
                    )?;
                }
            },
        }
    }

    writeln!(
        output,
        "\n👋 Final score: {}",
        game.score().to_string().bright_yellow().bold()
    )?;
    Ok(())
}

fn print_root<S: SpellChecker, O: Write>(game: &WordScramble<S>, output: &mut O) -> io::Result<()> {
    writeln!(output, "{}", "─".repeat(60).cyan())?;
    writeln!(
        output,
        "Root word: {}",
        spaced_letters(game.root_word()).bright_yellow().bold()
    )?;
    writeln!(output, "{}", "─".repeat(60).cyan())
}

fn print_words<S: SpellChecker, O: Write>(game: &WordScramble<S>, output: &mut O) -> io::Result<()> {
    if game.used_words().is_empty() {
        return writeln!(output, "No words yet.");
    }
    for word in game.used_words() {
        writeln!(output, "  {} {}", score_badge(word).bright_black(), word)?;
    }
    writeln!(output, "Score: {}", game.score())
}

fn print_help<O: Write>(output: &mut O) -> io::Result<()> {
    writeln!(output, "Commands:")?;
    writeln!(output, "  :new    start a new game with another root word")?;
    writeln!(output, "  :words  list the words found so far")?;
    writeln!(output, "  :quit   leave the game")?;
    writeln!(output, "Anything else is submitted as a word.")
}
