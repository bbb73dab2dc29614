use crate::codewords::Codewords;
use crate::tables::GRID;

/// Number of module rows in a MaxiCode symbol.
pub const ROWS: usize = 33;
/// Number of modules per row. Odd rows are drawn offset by half a module.
pub const COLS: usize = 30;

/// Orientation modules around the bullseye, always dark.
pub const ORIENTATION_MODULES: [(usize, usize); 11] = [
    (9, 10), (9, 11), (10, 11),
    (15, 7), (16, 8),
    (16, 20), (17, 20),
    (22, 10), (23, 10),
    (22, 17), (23, 17),
];

/// Unused modules at the end of the top row, always dark.
pub const FILLER_MODULES: [(usize, usize); 2] = [(0, 28), (0, 29)];

/// The 33 x 30 module matrix of a symbol, `true` for a dark hexagon. The
/// bullseye area in the middle carries no module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleGrid([bool; ROWS * COLS]);

impl ModuleGrid {
    /// An all light grid.
    pub const fn new() -> Self {
        Self([false; ROWS * COLS])
    }

    /// Maps every codeword bit onto its module, then sets the fixed modules.
    pub fn from_codewords(codewords: &Codewords) -> Self {
        let mut grid = Self::new();
        for (module, &g) in grid.0.iter_mut().zip(GRID.iter()) {
            if g == 0 {
                continue;
            }
            let g = g as usize + 5;
            let (codeword, bit) = (g / 6 - 1, g % 6);
            *module = codewords[codeword] & (0x20 >> bit) != 0;
        }

        for (row, col) in ORIENTATION_MODULES.into_iter().chain(FILLER_MODULES) {
            grid.set(row, col, true);
        }
        grid
    }

    /// Whether the module at `row`, `col` is dark. Panics when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < ROWS && col < COLS, "module ({row}, {col}) is outside the symbol");
        self.0[row * COLS + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        assert!(row < ROWS && col < COLS, "module ({row}, {col}) is outside the symbol");
        self.0[row * COLS + col] = dark;
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.0.chunks_exact(COLS)
    }

    /// Iterates over the `(row, col)` positions of the dark modules.
    pub fn modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter()
            .enumerate()
            .filter(|&(_, &dark)| dark)
            .map(|(i, _)| (i / COLS, i % COLS))
    }

    /// Every module, row by row.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl Default for ModuleGrid {
    fn default() -> Self {
        Self::new()
    }
}
