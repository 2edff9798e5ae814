use crossterm::style::Color;
use hidden_grid_core::ThemeKind;

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Clue number color
    pub clue: Color,
    /// Clue number color once the line's count is satisfied
    pub clue_done: Color,
    /// Filled cell color
    pub filled: Color,
    /// Marked-empty cell color
    pub marked: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Timer/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Medal/level-up highlight color
    pub accent: Color,
    /// Warning/exhausted-budget color
    pub warn: Color,
}

impl Theme {
    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            clue: Color::Rgb { r: 140, g: 150, b: 180 },
            clue_done: Color::Rgb { r: 90, g: 220, b: 130 },
            filled: Color::Rgb { r: 80, g: 200, b: 140 },
            marked: Color::Rgb { r: 120, g: 125, b: 140 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            accent: Color::Rgb { r: 255, g: 200, b: 80 },
            warn: Color::Rgb { r: 255, g: 110, b: 90 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            clue: Color::Rgb { r: 110, g: 110, b: 130 },
            clue_done: Color::Rgb { r: 30, g: 150, b: 70 },
            filled: Color::Rgb { r: 30, g: 150, b: 100 },
            marked: Color::Rgb { r: 140, g: 140, b: 155 },
            selected_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            accent: Color::Rgb { r: 200, g: 140, b: 20 },
            warn: Color::Rgb { r: 210, g: 60, b: 50 },
        }
    }
}
