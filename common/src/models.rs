use serde::{Deserialize, Serialize};

/// What a presentation layer gets to see of a single cell.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "state")]
pub enum Cell {
    #[serde(rename = "hidden")]
    Hidden,
    #[serde(rename = "revealed")]
    Revealed { adjacent: u8 },
    #[serde(rename = "mine")]
    Mine,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GameParams {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            rows: 9,
            cols: 9,
            mines: 10,
        }
    }
}

/// `won` is only ever set together with `over`.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub won: bool,
    pub over: bool,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_lost(&self) -> bool {
        self.over && !self.won
    }
}
