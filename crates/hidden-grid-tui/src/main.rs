mod app;
mod game;
mod render;
mod store;
mod theme;

use app::{App, AppAction};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use game::{GameSession, Mode};
use hidden_grid_core::{daily_seed, is_daily_seed, practice_seed, Difficulty};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Nonogram-style logic puzzle with daily challenges and local progression.
#[derive(Parser)]
#[command(name = "hidden-grid", version, about)]
struct Args {
    /// Difficulty to play (beginner, medium, hard); defaults to the saved setting
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Start with a practice puzzle instead of today's daily
    #[arg(short, long)]
    practice: bool,

    /// Play a specific seed (overrides daily/practice selection)
    #[arg(long)]
    seed: Option<String>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let store = store::ProfileStore::load();
    let difficulty = args
        .difficulty
        .unwrap_or(store.profile().settings.difficulty);
    let today = chrono::Local::now().date_naive();

    let (seed, mode) = match args.seed {
        Some(seed) => {
            let mode = if is_daily_seed(&seed) { Mode::Daily } else { Mode::Practice };
            (seed, mode)
        }
        None if args.practice => (
            practice_seed(&game::practice_token(), difficulty),
            Mode::Practice,
        ),
        None => (daily_seed(today, difficulty), Mode::Daily),
    };

    let session = GameSession::new(&seed, difficulty, mode);
    let mut app = App::new(store, session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        render::render(stdout, app)?;
        stdout.flush()?;

        // Handle input with a timeout so the timer keeps ticking
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }
                match app.handle_key(key) {
                    AppAction::Continue => {}
                    AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
