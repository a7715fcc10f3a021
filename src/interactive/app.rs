//! TUI application state and logic

use crate::core::ValidationError;
use crate::game::{RootAnalysis, Submission, WordScramble, analyze_root};
use crate::speller::WordListSpeller;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: WordScramble<WordListSpeller>,
    pub rng: StdRng,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub analysis: Option<RootAnalysis>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// A dismissible notification raised by a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl From<ValidationError> for Alert {
    fn from(error: ValidationError) -> Self {
        Self {
            title: error.title().to_string(),
            message: error.message(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: usize,
}

impl App {
    #[must_use]
    pub fn new(game: WordScramble<WordListSpeller>, rng: StdRng) -> Self {
        Self {
            game,
            rng,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Welcome! Make as many words as you can from the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            analysis: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn new_game(&mut self) {
        if self.game.is_started() {
            self.record_finished_game();
        }

        self.game.new_game_with(&mut self.rng);
        self.input_buffer.clear();
        self.alert = None;

        let dictionary: Vec<&str> = self
            .game
            .speller()
            .words_in(&self.game.rules().language)
            .collect();
        self.analysis = Some(analyze_root(
            self.game.root_word(),
            &dictionary,
            self.game.rules(),
        ));

        let text = format!("New game! Root word: {}", self.game.root_word().to_uppercase());
        self.add_message(&text, MessageStyle::Info);
    }

    fn record_finished_game(&mut self) {
        self.stats.games_played += 1;
        self.stats.best_score = self.stats.best_score.max(self.game.score());
    }

    /// Submit the input buffer as a word
    ///
    /// The buffer is cleared only when the word is accepted.
    pub fn submit_input(&mut self) {
        match self.game.submit(&self.input_buffer) {
            Ok(Submission::Empty) => {}
            Ok(Submission::Accepted { word, points }) => {
                self.input_buffer.clear();
                self.add_message(
                    &format!("{} +{points}", word.to_uppercase()),
                    MessageStyle::Success,
                );
                let found_all = self
                    .analysis
                    .as_ref()
                    .is_some_and(|a| self.game.used_words().len() == a.word_count());
                if found_all {
                    self.add_message("🎉 You found every word!", MessageStyle::Success);
                }
            }
            Err(error) => {
                self.add_message(error.title(), MessageStyle::Error);
                self.alert = Some(Alert::from(error));
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Words found so far and words available for the current root
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let possible = self.analysis.as_ref().map_or(0, RootAnalysis::word_count);
        (self.game.used_words().len(), possible)
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            // An open alert swallows input until dismissed
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
