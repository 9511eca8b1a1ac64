use serde::{Deserialize, Serialize};

use crate::models::{Cell, GameState};

/// Full, render-ready picture of a board at one point in time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
    pub field: Vec<Vec<Cell>>,
    #[serde(flatten)]
    pub state: GameState,
}

impl BoardSnapshot {
    pub fn count_hidden(&self) -> usize {
        self.field
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, Cell::Hidden))
            .count()
    }

    /// Text rendering, one line per row: `#` hidden, `*` mine, digits for
    /// counts and `?` for counts no board can produce.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in &self.field {
            for cell in row {
                match *cell {
                    Cell::Hidden => out.push('#'),
                    Cell::Mine => out.push('*'),
                    Cell::Revealed { adjacent: 0 } => out.push('.'),
                    Cell::Revealed { adjacent } => {
                        out.push(char::from_digit(adjacent.into(), 10).unwrap_or('?'))
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}
