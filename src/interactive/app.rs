//! TUI application state and logic

use crate::core::{Code, Feedback, Symbol};
use crate::game::{GameConfig, GameSession, GameState};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// A checked row on the board
#[derive(Debug, Clone)]
pub struct BoardRow {
    pub guess: Code,
    pub feedback: Feedback,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

/// Application state
///
/// The colour currently picked from the palette lives here as `selected`;
/// the game session never sees it.
pub struct App {
    pub config: GameConfig,
    pub session: GameSession,
    pub rows: Vec<BoardRow>,
    pub slots: Vec<Option<Symbol>>,
    pub cursor: usize,
    pub selected: Option<Symbol>,
    pub revealed: Option<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let session = GameSession::new(config.clone(), &mut rng)?;
        let slots = vec![None; config.secret_length];

        Ok(Self {
            config,
            session,
            rows: Vec::new(),
            slots,
            cursor: 0,
            selected: None,
            revealed: None,
            messages: vec![
                Message {
                    text: "Welcome! Break the hidden colour code.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Pick a colour with 1-9, place it with Space, check with Enter."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            rng,
        })
    }

    /// Pick the palette colour at `index` (zero-based)
    pub fn select(&mut self, index: usize) {
        if let Some(&symbol) = self.config.palette.symbols().get(index) {
            self.selected = Some(symbol);
            debug!(index, "selected colour");
        } else {
            self.add_message("No colour with that number", MessageStyle::Error);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor + 1 < self.slots.len() {
            self.cursor += 1;
        }
    }

    /// Put the selected colour in the slot under the cursor and advance
    pub fn place_selected(&mut self) {
        if self.session.is_over() {
            return;
        }
        let Some(symbol) = self.selected else {
            self.add_message("Select a colour first", MessageStyle::Error);
            return;
        };

        self.slots[self.cursor] = Some(symbol);
        self.move_cursor_right();
    }

    /// Empty the slot under the cursor
    pub fn clear_slot(&mut self) {
        if let Some(slot) = self.slots.get_mut(self.cursor) {
            *slot = None;
        }
    }

    /// Submit the current row if every slot is filled
    pub fn check(&mut self) {
        if self.session.is_over() {
            self.add_message("Game over. Press 'n' for a new game.", MessageStyle::Info);
            return;
        }

        let Some(guess) = self.slots.iter().copied().collect::<Option<Code>>() else {
            self.add_message("Fill every slot before checking", MessageStyle::Error);
            return;
        };

        match self.session.submit_guess(&guess) {
            Ok(feedback) => {
                self.rows.push(BoardRow { guess, feedback });
                self.slots.fill(None);
                self.cursor = 0;
                self.after_guess(feedback);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn after_guess(&mut self, feedback: Feedback) {
        match self.session.state() {
            GameState::InProgress => {
                self.add_message(
                    &format!(
                        "{feedback} | {} guesses left",
                        self.session.rounds_remaining()
                    ),
                    MessageStyle::Info,
                );
            }
            GameState::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.reveal();

                let celebration = match self.session.rounds_used() {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                    2..=3 => "🔥 MAGNIFICENT! 🔥",
                    4..=6 => "👏 GREAT JOB! 👏",
                    _ => "🎉 CODE BROKEN! 🎉",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameState::Lost => {
                self.stats.total_games += 1;
                self.reveal();
                self.add_message("Out of guesses!", MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    fn reveal(&mut self) {
        match self.session.reveal_secret_string() {
            Ok(secret) => {
                self.add_message(&format!("The code was {secret}"), MessageStyle::Info);
                self.revealed = Some(secret);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Abandon the current game and start another
    pub fn new_game(&mut self) {
        match GameSession::new(self.config.clone(), &mut self.rng) {
            Ok(session) => {
                if !self.session.is_over() && !self.rows.is_empty() {
                    self.stats.total_games += 1;
                }
                self.session = session;
                self.rows.clear();
                self.slots.fill(None);
                self.cursor = 0;
                self.revealed = None;
                self.messages.clear();
                self.add_message("New game started! Good luck.", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
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

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char(c @ '1'..='9') => {
                self.select(c as usize - '1' as usize);
            }
            KeyCode::Char(' ') => self.place_selected(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Backspace | KeyCode::Delete => self.clear_slot(),
            KeyCode::Enter => self.check(),
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;
    use rand::SeedableRng;

    fn app() -> App {
        App::new(GameConfig::default(), StdRng::seed_from_u64(17)).unwrap()
    }

    /// Secret for the app built by `app()`
    fn secret() -> Vec<Symbol> {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(17);
        let session = GameSession::new(GameConfig::default(), &mut rng).unwrap();
        palette
            .parse_code(&session.reveal_secret_string().unwrap())
            .unwrap()
            .into_symbols()
    }

    fn enter(app: &mut App, code: &[Symbol]) {
        for &symbol in code {
            let index = app.config.palette.index_of(symbol).unwrap();
            app.select(index);
            app.place_selected();
        }
        app.check();
    }

    #[test]
    fn place_requires_selection() {
        let mut app = app();
        app.place_selected();
        assert!(app.slots.iter().all(Option::is_none));
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn selection_is_sticky_and_cursor_advances() {
        let mut app = app();
        app.select(2);
        app.place_selected();
        app.place_selected();

        assert_eq!(app.selected, Some(Symbol::BLUE));
        assert_eq!(app.slots[..2], [Some(Symbol::BLUE), Some(Symbol::BLUE)]);
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app();
        app.move_cursor_left();
        assert_eq!(app.cursor, 0);
        for _ in 0..10 {
            app.move_cursor_right();
        }
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn invalid_selection_keeps_previous() {
        let mut app = app();
        app.select(0);
        app.select(8);
        assert_eq!(app.selected, Some(Symbol::RED));
    }

    #[test]
    fn incomplete_row_not_checked() {
        let mut app = app();
        app.select(0);
        app.place_selected();
        app.check();
        assert!(app.rows.is_empty());
        assert_eq!(app.session.rounds_used(), 0);
    }

    #[test]
    fn clear_slot_empties_cursor_position() {
        let mut app = app();
        app.select(1);
        app.place_selected();
        app.move_cursor_left();
        app.clear_slot();
        assert_eq!(app.slots[0], None);
    }

    #[test]
    fn winning_row_reveals_and_counts() {
        let mut app = app();
        let secret = secret();
        enter(&mut app, &secret);

        assert_eq!(app.session.state(), GameState::Won);
        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.rows[0].feedback, Feedback::new(4, 0));
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_games, 1);
        assert!(app.revealed.is_some());
        assert!(app.slots.iter().all(Option::is_none));
    }

    #[test]
    fn lost_row_reveals_and_counts() {
        let config = GameConfig::new(Palette::default(), 4, 1);
        let mut app = App::new(config, StdRng::seed_from_u64(17)).unwrap();
        let palette = Palette::default();
        let secret = palette
            .parse_code(&app.session.reveal_secret_string().unwrap())
            .unwrap();
        let guess: Vec<Symbol> = secret
            .iter()
            .map(|&s| if s == Symbol::RED { Symbol::GREEN } else { Symbol::RED })
            .collect();
        enter(&mut app, &guess);

        assert_eq!(app.session.state(), GameState::Lost);
        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.rows[0].feedback.exact, 0);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.revealed, Some(secret.labels(&palette).unwrap().concat()));
        assert!(matches!(
            app.messages.iter().rev().nth(1).map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn new_game_resets_board() {
        let mut app = app();
        enter(&mut app, &secret());
        app.new_game();

        assert_eq!(app.session.state(), GameState::InProgress);
        assert!(app.rows.is_empty());
        assert!(app.revealed.is_none());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn keys_drive_the_board() {
        let mut app = app();
        app.handle_key(KeyCode::Char('3'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(app.slots[0], Some(Symbol::BLUE));

        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
