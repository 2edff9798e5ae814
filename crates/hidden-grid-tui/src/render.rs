use crate::app::{App, ScreenState};
use crate::game::format_time;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use hidden_grid_core::{
    level_from_xp, title_for_level, AchievementId, CellState, Difficulty, Medal,
};
use std::io;

const GRID_X: u16 = 2;
const GRID_Y: u16 = 1;
/// Width of the row-clue gutter to the left of the grid.
const GUTTER: u16 = 4;
/// Horizontal character stride per cell.
const CELL_W: u16 = 3;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;

    match app.screen_state {
        ScreenState::Playing => render_game_screen(stdout, app)?,
        ScreenState::Solved => {
            render_game_screen(stdout, app)?;
            render_solved_overlay(stdout, app, term_width, term_height)?;
        }
        ScreenState::Stats => render_stats_screen(stdout, app)?,
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_game_screen(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let size = app.session.puzzle().size;

    let mode = match app.session.mode() {
        crate::game::Mode::Daily => "daily",
        crate::game::Mode::Practice => "practice",
    };
    execute!(
        stdout,
        MoveTo(GRID_X, GRID_Y),
        SetForegroundColor(theme.fg),
        Print(format!("Hidden Grid  ({mode} / {})", app.session.difficulty()))
    )?;

    render_grid(stdout, app)?;

    let info_x = GRID_X + GUTTER + size as u16 * CELL_W + 4;
    render_info_panel(stdout, app, info_x, GRID_Y + 2)?;

    let controls_y = GRID_Y + 4 + size as u16;
    execute!(
        stdout,
        MoveTo(GRID_X, controls_y),
        SetForegroundColor(theme.key),
        Print("arrows/hjkl"),
        SetForegroundColor(theme.info),
        Print(" move  "),
        SetForegroundColor(theme.key),
        Print("space"),
        SetForegroundColor(theme.info),
        Print(" fill  "),
        SetForegroundColor(theme.key),
        Print("x"),
        SetForegroundColor(theme.info),
        Print(" mark  "),
        SetForegroundColor(theme.key),
        Print("v"),
        SetForegroundColor(theme.info),
        Print(" reveal  "),
        SetForegroundColor(theme.key),
        Print("r"),
        SetForegroundColor(theme.info),
        Print(" reset  "),
        SetForegroundColor(theme.key),
        Print("d/n"),
        SetForegroundColor(theme.info),
        Print(" daily/practice  "),
        SetForegroundColor(theme.key),
        Print("1-3"),
        SetForegroundColor(theme.info),
        Print(" difficulty  "),
        SetForegroundColor(theme.key),
        Print("s"),
        SetForegroundColor(theme.info),
        Print(" stats  "),
        SetForegroundColor(theme.key),
        Print("q"),
        SetForegroundColor(theme.info),
        Print(" quit")
    )?;

    if let Some(ref msg) = app.message {
        execute!(
            stdout,
            MoveTo(GRID_X, controls_y + 1),
            SetForegroundColor(theme.warn),
            Print(msg)
        )?;
    }

    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let size = app.session.puzzle().size;
    let puzzle = app.session.puzzle();

    // Column clues above the grid, colored once the column count matches.
    let clue_y = GRID_Y + 2;
    for col in 0..size {
        let x = GRID_X + GUTTER + col as u16 * CELL_W;
        let color = if app.session.col_satisfied(col) {
            theme.clue_done
        } else {
            theme.clue
        };
        execute!(
            stdout,
            MoveTo(x, clue_y),
            SetForegroundColor(color),
            Print(format!("{:>2}", puzzle.col_counts[col]))
        )?;
    }

    for row in 0..size {
        let y = clue_y + 1 + row as u16;

        let color = if app.session.row_satisfied(row) {
            theme.clue_done
        } else {
            theme.clue
        };
        execute!(
            stdout,
            MoveTo(GRID_X, y),
            SetForegroundColor(color),
            Print(format!("{:>3}", puzzle.row_counts[row]))
        )?;

        for col in 0..size {
            let x = GRID_X + GUTTER + col as u16 * CELL_W;
            let selected = app.cursor == (row, col);
            let bg = if selected { theme.selected_bg } else { theme.bg };
            let (glyph, color) = if app.session.is_paused() {
                ("··", theme.border)
            } else {
                match app.session.cell(row, col) {
                    CellState::Filled => ("██", theme.filled),
                    CellState::MarkedEmpty => ("✖ ", theme.marked),
                    CellState::Empty => ("· ", theme.border),
                }
            };
            execute!(
                stdout,
                MoveTo(x, y),
                SetBackgroundColor(bg),
                SetForegroundColor(color),
                Print(glyph),
                SetBackgroundColor(theme.bg)
            )?;
        }
    }

    if app.session.is_paused() {
        execute!(
            stdout,
            MoveTo(GRID_X + GUTTER, clue_y + 1 + size as u16 / 2),
            SetForegroundColor(theme.accent),
            Print("PAUSED (p to resume)")
        )?;
    }

    Ok(())
}

fn render_info_panel(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let profile = app.store.profile();
    let info = level_from_xp(profile.xp);
    let mut line = 0;

    let put = |stdout: &mut io::Stdout, line: &mut u16, text: String| -> io::Result<()> {
        execute!(
            stdout,
            MoveTo(x, y + *line),
            SetForegroundColor(theme.info),
            Print(text)
        )?;
        *line += 1;
        Ok(())
    };

    put(stdout, &mut line, format!("Seed: {}", app.session.seed()))?;
    if profile.settings.show_timer {
        put(
            stdout,
            &mut line,
            format!("Time: {}", format_time(app.session.elapsed_secs())),
        )?;
    }
    put(stdout, &mut line, format!("Moves: {}", app.session.moves()))?;
    let reveals = match app.session.reveals_left() {
        None => "unlimited".to_string(),
        Some(n) => n.to_string(),
    };
    put(stdout, &mut line, format!("Reveals left: {reveals}"))?;
    line += 1;

    put(
        stdout,
        &mut line,
        format!("Level {} - {}", info.level, title_for_level(info.level)),
    )?;
    put(stdout, &mut line, xp_bar(info.into_level, info.next_level_xp))?;
    if profile.streak.current > 0 {
        put(
            stdout,
            &mut line,
            format!("Streak: {} (best {})", profile.streak.current, profile.streak.best),
        )?;
    }
    Ok(())
}

/// Ten-segment progress bar toward the next level.
fn xp_bar(into_level: u32, next_level_xp: u32) -> String {
    let span = next_level_xp.max(1);
    let filled = ((into_level * 10) / span).min(10) as usize;
    format!(
        "[{}{}] {}/{} xp",
        "#".repeat(filled),
        "-".repeat(10 - filled),
        into_level,
        next_level_xp
    )
}

fn render_solved_overlay(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let Some(ref outcome) = app.last_outcome else {
        return Ok(());
    };

    let mut lines: Vec<String> = Vec::new();
    lines.push("Solved!".to_string());
    lines.push(format!("Time: {}", format_time(outcome.seconds)));
    if outcome.medal != Medal::None {
        lines.push(format!("Medal: {}", outcome.medal.label()));
    }
    match outcome.daily_bonus {
        Some(bonus) => lines.push(format!("XP: +{} (daily bonus +{bonus})", outcome.gained_xp)),
        None => lines.push(format!("XP: +{}", outcome.gained_xp)),
    }
    if let Some((from, to)) = outcome.level_up {
        lines.push(format!("Level up! {from} -> {to}"));
    }
    for id in &outcome.newly_unlocked {
        lines.push(format!("Achievement unlocked: {}", id.name()));
    }
    lines.push(String::new());
    lines.push("[Enter] next  [s] stats  [q] quit".to_string());

    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 4;
    let height = lines.len() as u16 + 2;
    let x = term_width.saturating_sub(width) / 2;
    let y = term_height.saturating_sub(height) / 2;

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.accent),
        Print(format!("+{}+", "-".repeat(width as usize - 2)))
    )?;
    for (i, text) in lines.iter().enumerate() {
        let pad = width as usize - 4 - text.chars().count();
        execute!(
            stdout,
            MoveTo(x, y + 1 + i as u16),
            SetForegroundColor(theme.accent),
            Print("| "),
            SetForegroundColor(theme.fg),
            Print(text),
            Print(" ".repeat(pad)),
            SetForegroundColor(theme.accent),
            Print(" |")
        )?;
    }
    execute!(
        stdout,
        MoveTo(x, y + height - 1),
        SetForegroundColor(theme.accent),
        Print(format!("+{}+", "-".repeat(width as usize - 2)))
    )?;
    Ok(())
}

fn render_stats_screen(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let profile = app.store.profile();
    let stats = &profile.stats;
    let info = level_from_xp(profile.xp);
    let mut y = GRID_Y;

    let put = |stdout: &mut io::Stdout, y: &mut u16, text: String| -> io::Result<()> {
        execute!(
            stdout,
            MoveTo(GRID_X, *y),
            SetForegroundColor(theme.fg),
            Print(text)
        )?;
        *y += 1;
        Ok(())
    };

    put(stdout, &mut y, "Player statistics".to_string())?;
    y += 1;
    put(
        stdout,
        &mut y,
        format!(
            "Level {} - {}  ({} xp total)",
            info.level,
            title_for_level(info.level),
            profile.xp
        ),
    )?;
    put(stdout, &mut y, format!("Puzzles solved: {}", profile.total_solved))?;
    put(
        stdout,
        &mut y,
        format!(
            "Medals: {} gold, {} silver, {} bronze",
            profile.medals.gold, profile.medals.silver, profile.medals.bronze
        ),
    )?;
    put(
        stdout,
        &mut y,
        format!(
            "Streak: {} current, {} best",
            profile.streak.current, profile.streak.best
        ),
    )?;
    put(stdout, &mut y, format!("Perfect solves: {}", stats.perfect_solves))?;
    y += 1;

    for difficulty in Difficulty::ALL {
        let solves = *stats.solves_by_difficulty.get(difficulty);
        let total = *stats.time_totals_by_difficulty.get(difficulty);
        let best = match stats.best_time.get(difficulty) {
            Some(secs) => format_time(*secs),
            None => "--:--".to_string(),
        };
        put(
            stdout,
            &mut y,
            format!(
                "{difficulty:<9} solves {solves:>4}   time {}   best {}",
                format_time(total),
                best
            ),
        )?;
    }
    y += 1;

    put(stdout, &mut y, "Achievements".to_string())?;
    for id in AchievementId::ALL {
        let (mark, date) = if profile.achievements.is_unlocked(id) {
            let date = profile
                .achievements
                .unlock_date(id)
                .map(|d| format!(" ({d})"))
                .unwrap_or_default();
            ("[x]", date)
        } else {
            ("[ ]", String::new())
        };
        put(stdout, &mut y, format!("{mark} {}{date}", id.name()))?;
    }
    y += 1;

    execute!(
        stdout,
        MoveTo(GRID_X, y),
        SetForegroundColor(theme.key),
        Print("esc"),
        SetForegroundColor(theme.info),
        Print(" back  "),
        SetForegroundColor(theme.key),
        Print("q"),
        SetForegroundColor(theme.info),
        Print(" quit")
    )?;
    Ok(())
}
