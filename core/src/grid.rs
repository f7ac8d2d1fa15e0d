//! The toroidal board and its per-cell streak arithmetic.

/// Rectangular board of signed cycle counters with toroidal topology.
///
/// Coordinates are `i64` so callers can probe neighbor offsets without
/// bounds-checking first: the plain accessors treat anything out of range as
/// dead, while [`Grid::wrap`] folds a coordinate back onto the torus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<i64>>,
}

impl Grid {
    /// A `width` x `height` board with every counter at zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![0; width]; height],
        }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    fn inside(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// Counter at `(x, y)`, or `0` for any out-of-range coordinate.
    #[must_use]
    pub fn cycle(&self, x: i64, y: i64) -> i64 {
        if self.inside(x, y) {
            self.rows[y as usize][x as usize]
        } else {
            0
        }
    }

    /// Write the counter at `(x, y)`; out-of-range writes are dropped.
    pub fn set_cycle(&mut self, x: i64, y: i64, cycle: i64) {
        if self.inside(x, y) {
            self.rows[y as usize][x as usize] = cycle;
        }
    }

    /// Mark a cell as freshly alive when seeding from a pattern.
    ///
    /// Seeding only ever adds: a `false` marker leaves the cell untouched,
    /// so overlaying a pattern never kills existing cells.
    pub fn seed(&mut self, x: i64, y: i64, alive: bool) {
        if alive {
            self.set_cycle(x, y, 1);
        }
    }

    #[must_use]
    pub fn alive(&self, x: i64, y: i64) -> bool {
        self.cycle(x, y) > 0
    }

    /// Fold a coordinate onto the torus.
    ///
    /// In-range coordinates come back unchanged; anything else wraps with a
    /// euclidean remainder, so `(-1, -1)` on a 5x5 board is `(4, 4)` and
    /// `(5, 5)` is `(0, 0)`. A zero-area board has nothing to fold onto and
    /// returns the input as-is.
    #[must_use]
    pub fn wrap(&self, x: i64, y: i64) -> (i64, i64) {
        if self.inside(x, y) || self.width() == 0 || self.height() == 0 {
            return (x, y);
        }
        (
            x.rem_euclid(self.width() as i64),
            y.rem_euclid(self.height() as i64),
        )
    }

    /// Advance the streak counter at the (wrapped) coordinate.
    ///
    /// A cell staying alive counts up, a cell staying dead counts down, and
    /// a liveness transition restarts the streak at +/-1. The counter never
    /// overflows: an alive cell saturated at `i64::MAX` restarts at 1, a
    /// dead cell saturated at `i64::MIN` drops back to 0.
    pub fn update_cycle(&mut self, x: i64, y: i64, alive_next: bool) {
        let (x, y) = self.wrap(x, y);
        let next = match (alive_next, self.cycle(x, y)) {
            (true, c) if c > 0 && c != i64::MAX => c + 1,
            (true, _) => 1,
            (false, c) if c < 0 && c != i64::MIN => c - 1,
            (false, c) if c > 0 => -1,
            (false, _) => 0,
        };
        self.set_cycle(x, y, next);
    }

    /// Liveness of `(x, y)` in the next generation, read from this grid.
    ///
    /// Counts the eight toroidally wrapped neighbors: exactly three alive
    /// neighbors produce a live cell, exactly two sustain an already-alive
    /// one. This is the only place the birth/survival rule lives.
    #[must_use]
    pub fn next_alive(&self, x: i64, y: i64) -> bool {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = self.wrap(x + dx, y + dy);
                if self.alive(nx, ny) {
                    count += 1;
                }
            }
        }
        count == 3 || (count == 2 && self.alive(x, y))
    }

    /// Read-only view of the counter rows, row-major, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }
}
