//! Board to text conversion.
//!
//! This module renders a [`Board`] as one line of glyphs per row, suitable
//! for a terminal. Empty squares alternate between a dark and a light
//! glyph in the usual chessboard pattern; occupied squares get the queen
//! glyph.
//!
//! # Examples
//!
//! ```
//! use queens_rs::board::Board;
//!
//! let mut board = Board::new(4);
//! assert!(board.solve());
//! println!("{}", board.to_text());
//! ```

use crate::board::Board;

const DEFAULT_DARK: &str = "⬛";
const DEFAULT_LIGHT: &str = "⬜";
const DEFAULT_QUEEN: &str = "👸";

/// Glyph configuration for board rendering.
///
/// The three glyphs can be overridden from the process environment via
/// [`Glyphs::from_env`]; the environment is read once there, never
/// ambiently, so renderers stay testable with an explicit configuration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Glyphs {
    /// Glyph for empty dark squares (env: `N_QUEENS_BLACK`).
    pub dark: String,
    /// Glyph for empty light squares (env: `N_QUEENS_WHITE`).
    pub light: String,
    /// Glyph for queen-occupied squares (env: `N_QUEENS_QUEEN`).
    pub queen: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            dark: DEFAULT_DARK.to_string(),
            light: DEFAULT_LIGHT.to_string(),
            queen: DEFAULT_QUEEN.to_string(),
        }
    }
}

impl Glyphs {
    /// Builds a configuration from the process environment.
    ///
    /// Reads `N_QUEENS_BLACK`, `N_QUEENS_WHITE`, and `N_QUEENS_QUEEN`,
    /// falling back to the defaults for any variable that is unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            dark: std::env::var("N_QUEENS_BLACK").unwrap_or(defaults.dark),
            light: std::env::var("N_QUEENS_WHITE").unwrap_or(defaults.light),
            queen: std::env::var("N_QUEENS_QUEEN").unwrap_or(defaults.queen),
        }
    }

    /// Returns the glyph for the given cell.
    fn for_cell(&self, occupied: bool, row_index: usize, column_index: usize) -> &str {
        if occupied {
            &self.queen
        } else if (row_index + column_index) % 2 == 0 {
            &self.dark
        } else {
            &self.light
        }
    }
}

impl Board {
    /// Renders the board with the default glyphs.
    pub fn to_text(&self) -> String {
        self.to_text_with_glyphs(&Glyphs::default())
    }

    /// Renders the board, one line per row, using the given glyphs.
    pub fn to_text_with_glyphs(&self, glyphs: &Glyphs) -> String {
        let n = self.size();
        let mut out = String::new();
        for row_index in 0..n {
            for column_index in 0..n {
                // Indices come from 0..n, so this cannot fail.
                let occupied = self.has_queen(row_index, column_index).unwrap_or(false);
                out.push_str(glyphs.for_cell(occupied, row_index, column_index));
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs() -> Glyphs {
        Glyphs {
            dark: "b".to_string(),
            light: "w".to_string(),
            queen: "Q".to_string(),
        }
    }

    #[test]
    fn test_empty_board_checkerboard() {
        let board = Board::new(4);
        let text = board.to_text_with_glyphs(&glyphs());
        assert_eq!(text, "bwbw\nwbwb\nbwbw\nwbwb\n");
    }

    #[test]
    fn test_solved_board_marks_queens() {
        let mut board = Board::new(4);
        assert!(board.solve());
        // Solution [1, 3, 0, 2].
        let text = board.to_text_with_glyphs(&glyphs());
        assert_eq!(text, "bQbw\nwbwQ\nQwbw\nwbQb\n");
    }

    #[test]
    fn test_empty_size_zero_board() {
        let board = Board::new(0);
        assert_eq!(board.to_text_with_glyphs(&glyphs()), "");
    }

    #[test]
    fn test_default_glyphs() {
        let g = Glyphs::default();
        assert_eq!(g.dark, "⬛");
        assert_eq!(g.light, "⬜");
        assert_eq!(g.queen, "👸");
    }

    #[test]
    fn test_from_env_overrides() {
        std::env::remove_var("N_QUEENS_BLACK");
        std::env::remove_var("N_QUEENS_WHITE");
        std::env::set_var("N_QUEENS_QUEEN", "#");
        let g = Glyphs::from_env();
        assert_eq!(g.queen, "#");
        assert_eq!(g.dark, "⬛");
        assert_eq!(g.light, "⬜");
        std::env::remove_var("N_QUEENS_QUEEN");
    }

    #[test]
    fn test_to_text_uses_defaults() {
        let board = Board::new(1);
        assert_eq!(board.to_text(), "⬛\n");
    }
}
