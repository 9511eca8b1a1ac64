/// Grid value used for a mine in [`crate::Board::board`].
pub const MINE: i8 = -1;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub mine: bool,
    pub adjacent: u8,
}

impl Cell {
    pub fn value(&self) -> i8 {
        if self.mine { MINE } else { self.adjacent as i8 }
    }
}

/// Row-major storage for the cells of one game.
#[derive(Debug, Clone)]
pub struct Field {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Cell>,
}

impl Field {
    /// `None` when `rows * cols` overflows or the cells cannot be allocated.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        let len = rows.checked_mul(cols)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, Cell::default());

        Some(Self { rows, cols, cells })
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| col + row * self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(self.index(row, col)?)
    }

    /// In-bounds cells within Chebyshev distance 1, excluding the cell itself.
    pub fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (-1isize..=1)
            .flat_map(|dy| (-1isize..=1).map(move |dx| (dy, dx)))
            .filter(|&(dy, dx)| dy != 0 || dx != 0)
            .filter_map(move |(dy, dx)| {
                let new_row = row.checked_add_signed(dy)?;
                let new_col = col.checked_add_signed(dx)?;
                (new_row < self.rows && new_col < self.cols).then_some((new_row, new_col))
            })
    }

    pub fn count_adjacent_mines(&self, row: usize, col: usize) -> u8 {
        self.neighbours(row, col)
            .filter(|&(r, c)| self.get(r, c).is_some_and(|cell| cell.mine))
            .count() as u8
    }

    pub fn to_grid(&self) -> Vec<Vec<i8>> {
        self.cells
            .chunks(self.cols)
            .map(|chunk| chunk.iter().map(Cell::value).collect())
            .collect()
    }
}
