use std::{cmp::min, collections::BTreeSet};

use rand::rngs::ThreadRng;
use tracing::{debug, info, instrument, warn};

use minesweeper_common::{
    models::{Cell, GameParams, GameState, Pos},
    snapshot::BoardSnapshot,
};

use crate::{
    data::{self, Field},
    error::BoardError,
    rng::MineRng,
};

/// What a single call to [`Board::reveal_cell`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// A safe cell was uncovered and the game goes on.
    Safe { adjacent: u8 },
    /// The last safe cell was uncovered.
    Won { adjacent: u8 },
    Mine,
    AlreadyRevealed,
    /// The game had already ended; nothing changed.
    GameFinished,
}

/// A single-player minesweeper game.
///
/// Mines are drawn from `R` on construction and on every restart. Each
/// reveal uncovers exactly one cell.
#[derive(Debug)]
pub struct Board<R: MineRng = ThreadRng> {
    field: Field,
    num_mines: usize,
    mines: BTreeSet<Pos>,
    revealed: BTreeSet<Pos>,
    state: GameState,
    rng: R,
}

/// Clamps the mine count and allocates the field, rejecting zero or
/// unrepresentable dimensions.
fn validate_params(params: &GameParams) -> Result<(GameParams, Field), BoardError> {
    let invalid = BoardError::InvalidDimensions {
        rows: params.rows,
        cols: params.cols,
    };
    if params.rows == 0 || params.cols == 0 {
        return Err(invalid);
    }

    let field = Field::try_new(params.rows, params.cols).ok_or(invalid)?;
    let params = GameParams {
        mines: min(params.mines, field.len()),
        ..*params
    };
    Ok((params, field))
}

impl Board {
    /// Creates a board whose mines come from the thread-local generator.
    pub fn new(rows: usize, cols: usize, mines: usize) -> Result<Self, BoardError> {
        Self::with_rng(rows, cols, mines, rand::rng())
    }

    pub fn from_params(params: GameParams) -> Result<Self, BoardError> {
        Self::from_params_with_rng(params, rand::rng())
    }
}

impl<R: MineRng> Board<R> {
    pub fn with_rng(rows: usize, cols: usize, mines: usize, rng: R) -> Result<Self, BoardError> {
        Self::from_params_with_rng(GameParams { rows, cols, mines }, rng)
    }

    #[instrument(level = "trace", skip(rng))]
    pub fn from_params_with_rng(params: GameParams, rng: R) -> Result<Self, BoardError> {
        let (params, field) = validate_params(&params)?;
        info!(
            "Creating new board: {}x{} with {} mines",
            params.rows, params.cols, params.mines
        );

        let mut board = Self {
            field,
            num_mines: params.mines,
            mines: BTreeSet::new(),
            revealed: BTreeSet::new(),
            state: GameState::default(),
            rng,
        };
        board.place_mines();
        Ok(board)
    }

    /// Draws `num_mines` distinct positions and derives every adjacency
    /// count from the final mine set. Expects a freshly cleared field.
    fn place_mines(&mut self) {
        let (rows, cols) = (self.field.rows, self.field.cols);

        while self.mines.len() < self.num_mines {
            let row = self.rng.below(rows);
            let col = self.rng.below(cols);
            if self.mines.insert(Pos { row, col })
                && let Some(index) = self.field.index(row, col)
            {
                self.field.cells[index].mine = true;
            }
        }

        for row in 0..rows {
            for col in 0..cols {
                let adjacent = self.field.count_adjacent_mines(row, col);
                if let Some(index) = self.field.index(row, col) {
                    self.field.cells[index].adjacent = adjacent;
                }
            }
        }

        debug!("Placed {} mines", self.mines.len());
    }

    fn reset(&mut self, mines: usize) {
        self.field.clear();
        self.num_mines = mines;
        self.mines.clear();
        self.revealed.clear();
        self.state = GameState::default();
        self.place_mines();
    }

    /// Starts a new game with the same dimensions and mine count.
    #[instrument(level = "trace", skip(self))]
    pub fn restart(&mut self) {
        info!(
            "Restarting board: {}x{} with {} mines",
            self.field.rows, self.field.cols, self.num_mines
        );
        self.reset(self.num_mines);
    }

    /// Starts a new game with different parameters. Invalid parameters leave
    /// the current game untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn restart_with(&mut self, params: GameParams) -> Result<(), BoardError> {
        let (params, field) = validate_params(&params)?;
        info!(
            "Restarting board with new parameters: {}x{} with {} mines",
            params.rows, params.cols, params.mines
        );
        self.field = field;
        self.reset(params.mines);
        Ok(())
    }

    pub fn reveal(&mut self, row: usize, col: usize) -> Result<Reveal, BoardError> {
        self.reveal_cell(Pos { row, col })
    }

    #[instrument(level = "trace", skip(self), fields(row = pos.row, col = pos.col))]
    pub fn reveal_cell(&mut self, pos: Pos) -> Result<Reveal, BoardError> {
        let Some(cell) = self.field.get(pos.row, pos.col).copied() else {
            warn!("Invalid reveal position: ({}, {})", pos.row, pos.col);
            return Err(BoardError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        };

        if self.state.over {
            debug!(
                "Ignoring reveal on finished game at ({}, {})",
                pos.row, pos.col
            );
            return Ok(Reveal::GameFinished);
        }

        if !self.revealed.insert(pos) {
            debug!("Cell ({}, {}) already revealed", pos.row, pos.col);
            return Ok(Reveal::AlreadyRevealed);
        }

        if cell.mine {
            warn!("Mine hit at ({}, {}) - game over!", pos.row, pos.col);
            self.state = GameState {
                won: false,
                over: true,
            };
            return Ok(Reveal::Mine);
        }

        debug!(
            "Revealed cell ({}, {}) with {} adjacent mines",
            pos.row, pos.col, cell.adjacent
        );

        if self.has_won() {
            info!("Game won! All safe cells revealed.");
            self.state = GameState {
                won: true,
                over: true,
            };
            return Ok(Reveal::Won {
                adjacent: cell.adjacent,
            });
        }

        Ok(Reveal::Safe {
            adjacent: cell.adjacent,
        })
    }

    fn has_won(&self) -> bool {
        self.revealed.len() == self.field.len() - self.num_mines
    }

    pub fn rows(&self) -> usize {
        self.field.rows
    }

    pub fn cols(&self) -> usize {
        self.field.cols
    }

    pub fn num_mines(&self) -> usize {
        self.num_mines
    }

    /// Grid of cell values: [`data::MINE`] for mines, otherwise the number of
    /// adjacent mines.
    pub fn board(&self) -> Vec<Vec<i8>> {
        self.field.to_grid()
    }

    pub fn value(&self, pos: Pos) -> Option<i8> {
        self.field.get(pos.row, pos.col).map(data::Cell::value)
    }

    pub fn mines(&self) -> &BTreeSet<Pos> {
        &self.mines
    }

    pub fn revealed(&self) -> &BTreeSet<Pos> {
        &self.revealed
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.field.index(pos.row, pos.col).is_some()
    }

    pub fn is_mine(&self, pos: Pos) -> bool {
        self.mines.contains(&pos)
    }

    pub fn is_revealed(&self, pos: Pos) -> bool {
        self.revealed.contains(&pos)
    }

    pub fn safe_cells_remaining(&self) -> usize {
        let safe_revealed = self.revealed.difference(&self.mines).count();
        self.field.len() - self.num_mines - safe_revealed
    }

    /// How the cell should be shown. Every mine is shown once the game is lost.
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        let cell = self.field.get(pos.row, pos.col)?;
        let shown = self.revealed.contains(&pos) || (cell.mine && self.state.is_lost());

        Some(match (shown, cell.mine) {
            (false, _) => Cell::Hidden,
            (true, true) => Cell::Mine,
            (true, false) => Cell::Revealed {
                adjacent: cell.adjacent,
            },
        })
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let field = (0..self.field.rows)
            .map(|row| {
                (0..self.field.cols)
                    .filter_map(|col| self.cell(Pos { row, col }))
                    .collect()
            })
            .collect();

        BoardSnapshot {
            rows: self.field.rows,
            cols: self.field.cols,
            mines: self.num_mines,
            field,
            state: self.state,
        }
    }
}
