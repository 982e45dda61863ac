//! GameView: formats engine state into a frame string.
//!
//! The hidden buffer rows are cropped; only the 20 visible rows are drawn.
//! Cells are colored per piece kind; the side pane shows hold, the bag
//! preview, and the score/level/lines/time readout.

use std::fmt::Write;
use std::time::Duration;

use crossterm::style::{Color, Stylize};

use marathon_engine::{pieces, Game};
use marathon_types::{PieceKind, Rotation, HIDDEN_ROWS, MATRIX_HEIGHT, MATRIX_WIDTH};

/// Display color for a piece kind.
pub fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Magenta,
        PieceKind::S => Color::Green,
        PieceKind::Z => Color::Red,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::DarkYellow,
    }
}

fn filled(kind: PieceKind) -> String {
    "  ".on(piece_color(kind)).to_string()
}

/// Format elapsed time as the information pane shows it.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render one full frame.
    pub fn render(&self, game: &Game) -> String {
        let playfield = self.playfield_lines(game);
        let pane = self.pane_lines(game);

        let mut out = String::new();
        let rows = playfield.len().max(pane.len());
        for i in 0..rows {
            let left = playfield.get(i).map(String::as_str).unwrap_or("");
            let right = pane.get(i).map(String::as_str).unwrap_or("");
            let _ = writeln!(out, "{left}  {right}");
        }
        out
    }

    fn playfield_lines(&self, game: &Game) -> Vec<String> {
        let matrix = game.matrix();
        let mut lines = Vec::with_capacity(MATRIX_HEIGHT as usize);

        lines.push(format!("┌{}┐", "──".repeat(MATRIX_WIDTH as usize)));
        for y in HIDDEN_ROWS as i8..MATRIX_HEIGHT as i8 {
            let mut line = String::from("│");
            for x in 0..MATRIX_WIDTH as i8 {
                match matrix.get(x, y) {
                    Some(Some(kind)) => line.push_str(&filled(kind)),
                    _ => line.push_str(" ."),
                }
            }
            line.push('│');
            lines.push(line);
        }
        lines.push(format!("└{}┘", "──".repeat(MATRIX_WIDTH as usize)));
        lines
    }

    fn pane_lines(&self, game: &Game) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(format!("Score: {}", game.score()));
        lines.push(format!("Level: {}", game.level()));
        lines.push(format!("Cleared: {}", game.lines()));
        lines.push(format!("Time: {}", format_elapsed(game.elapsed())));
        lines.push(String::new());

        lines.push("Hold:".to_string());
        match game.held() {
            Some(kind) => lines.extend(Self::thumbnail(kind)),
            None => lines.push("  (empty)".to_string()),
        }
        lines.push(String::new());

        lines.push("Next:".to_string());
        for kind in game.preview() {
            lines.extend(Self::thumbnail(kind));
            lines.push(String::new());
        }

        if game.is_game_over() {
            lines.push("GAME OVER".to_string());
        } else if game.is_soft_dropping() {
            lines.push("soft drop".to_string());
        }

        lines
    }

    /// Two-row miniature of a piece in its spawn orientation.
    fn thumbnail(kind: PieceKind) -> Vec<String> {
        let shape = pieces::shape(kind, Rotation::North);
        let rows = if kind == PieceKind::I { 1..2 } else { 0..2 };

        rows.map(|row| {
            let mut line = String::from("  ");
            for col in 0..4 {
                if shape.contains(&(col, row)) {
                    line.push_str(&filled(kind));
                } else {
                    line.push_str("  ");
                }
            }
            line
        })
        .collect()
    }
}
