use crate::game::{practice_token, GameSession, Mode};
use crate::store::ProfileStore;
use crate::theme::Theme;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use hidden_grid_core::{
    apply_solve, daily_seed, practice_seed, Difficulty, SolveContext, SolveOutcome, ThemeKind,
};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Normal gameplay
    Playing,
    /// Completion overlay after a solve
    Solved,
    /// Statistics and achievements screen
    Stats,
}

/// The main application state
pub struct App {
    pub session: GameSession,
    /// Selected cell (row, col)
    pub cursor: (usize, usize),
    pub theme: Theme,
    pub screen_state: ScreenState,
    pub store: ProfileStore,
    /// Outcome of the last completed solve, for the overlay
    pub last_outcome: Option<SolveOutcome>,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
    /// Whether the current solve has been recorded (to avoid double counting)
    solve_recorded: bool,
}

impl App {
    pub fn new(store: ProfileStore, session: GameSession) -> Self {
        let theme = Theme::for_kind(store.profile().settings.theme);
        Self {
            session,
            cursor: (0, 0),
            theme,
            screen_state: ScreenState::Playing,
            store,
            last_outcome: None,
            message: None,
            message_timer: 0,
            solve_recorded: false,
        }
    }

    /// Update timers and latch a finished solve (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        if self.screen_state == ScreenState::Playing && self.session.is_solved() {
            self.record_solve();
            self.screen_state = ScreenState::Solved;
        }
    }

    /// Run the progression pipeline for the finished session, once.
    fn record_solve(&mut self) {
        if self.solve_recorded {
            return;
        }
        self.solve_recorded = true;

        let ctx = SolveContext {
            seed: self.session.seed().to_string(),
            difficulty: self.session.difficulty(),
            seconds: self.session.elapsed_secs(),
            // No penalty tracking exists in this shell, so every completed
            // solve counts as perfect.
            perfect: true,
            today: Local::now().date_naive(),
        };

        let mut outcome = None;
        self.store.update(|profile| {
            let (next, solved) = apply_solve(profile, &ctx);
            outcome = Some(solved);
            next
        });
        self.last_outcome = outcome;
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen_state {
            ScreenState::Playing => self.handle_game_key(key),
            ScreenState::Solved => self.handle_solved_key(key),
            ScreenState::Stats => self.handle_stats_key(key),
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> AppAction {
        let size = self.session.puzzle().size;
        let (row, col) = self.cursor;
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor.0 = row.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor.0 = (row + 1).min(size - 1);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor.1 = col.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor.1 = (col + 1).min(size - 1);
            }
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('f') => {
                self.session.cycle_cell(row, col, false);
            }
            KeyCode::Char('x') | KeyCode::Char('m') => {
                self.session.cycle_cell(row, col, true);
            }
            KeyCode::Char('v') => {
                if self.session.reveal() {
                    self.show_message("Excess marks corrected");
                } else if self.session.is_paused() {
                    self.show_message("Paused");
                } else {
                    self.show_message("No reveals left on this difficulty");
                }
            }
            KeyCode::Char('r') => {
                self.session.reset_board();
            }
            KeyCode::Char('p') => {
                self.session.toggle_pause();
            }
            KeyCode::Char('d') => self.new_daily(),
            KeyCode::Char('n') => self.new_practice(),
            KeyCode::Char('1') => self.set_difficulty(Difficulty::Beginner),
            KeyCode::Char('2') => self.set_difficulty(Difficulty::Medium),
            KeyCode::Char('3') => self.set_difficulty(Difficulty::Hard),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('s') => {
                self.screen_state = ScreenState::Stats;
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_solved_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => {
                match self.session.mode() {
                    Mode::Daily => self.new_daily(),
                    Mode::Practice => self.new_practice(),
                }
            }
            KeyCode::Char('s') => {
                self.screen_state = ScreenState::Stats;
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_stats_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Esc | KeyCode::Char('s') | KeyCode::Enter => {
                self.screen_state = if self.session.is_solved() {
                    ScreenState::Solved
                } else {
                    ScreenState::Playing
                };
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn new_daily(&mut self) {
        let difficulty = self.session.difficulty();
        let seed = daily_seed(Local::now().date_naive(), difficulty);
        self.start_session(&seed, difficulty, Mode::Daily);
    }

    fn new_practice(&mut self) {
        let difficulty = self.session.difficulty();
        let seed = practice_seed(&practice_token(), difficulty);
        self.start_session(&seed, difficulty, Mode::Practice);
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty == self.session.difficulty() {
            return;
        }
        self.store.update(|profile| {
            let mut next = profile.clone();
            next.settings.difficulty = difficulty;
            next
        });
        let mode = self.session.mode();
        let seed = match mode {
            Mode::Daily => daily_seed(Local::now().date_naive(), difficulty),
            Mode::Practice => practice_seed(&practice_token(), difficulty),
        };
        self.start_session(&seed, difficulty, mode);
    }

    fn toggle_theme(&mut self) {
        self.store.update(|profile| {
            let mut next = profile.clone();
            next.settings.theme = match next.settings.theme {
                ThemeKind::Dark => ThemeKind::Light,
                ThemeKind::Light => ThemeKind::Dark,
            };
            next
        });
        self.theme = Theme::for_kind(self.store.profile().settings.theme);
    }

    /// Replace the session with a fresh puzzle; the old board is discarded.
    fn start_session(&mut self, seed: &str, difficulty: Difficulty, mode: Mode) {
        self.session = GameSession::new(seed, difficulty, mode);
        self.cursor = (0, 0);
        self.solve_recorded = false;
        self.last_outcome = None;
        self.screen_state = ScreenState::Playing;
    }
}
