use super::side::Side;

/// Reference board dimensions.
pub const DEFAULT_WIDTH: usize = 13;
pub const DEFAULT_HEIGHT: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The side occupying this cell, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Side::White),
            Cell::Black => Some(Side::Black),
        }
    }
}

/// A fixed-size grid stored row-major in a flat vector.
///
/// Index `i` sits at row `i / width`, column `i % width`. Dimensions never
/// change after construction; only cell states do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the board
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell is occupied
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Get the cell at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the board.
    pub fn get(&self, index: usize) -> Cell {
        self.assert_in_bounds(index);
        self.cells[index]
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.assert_in_bounds(index);
        self.cells[index] = cell;
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.width
    }

    pub fn col_of(&self, index: usize) -> usize {
        index % self.width
    }

    /// Flat index of a (row, col) position.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the board.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "position ({row}, {col}) is outside the {}x{} board",
            self.width,
            self.height
        );
        row * self.width + col
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Clear every cell back to `Empty`
    pub(crate) fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    fn assert_in_bounds(&self, index: usize) {
        assert!(
            index < self.cells.len(),
            "cell index {index} is outside the {}x{} board",
            self.width,
            self.height
        );
    }
}

/// Plain-text grid: `.` empty, `O` white, `X` black, one row per line.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::White => "O",
                    Cell::Black => "X",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
