use crate::cell::Cell;
use crate::error::{LifeError, Result};
use crate::patterns::Pattern;
use crossterm::{
    queue,
    style::{Color, Print, SetForegroundColor},
};
use rand::Rng;
use regex::Regex;
use std::fmt;
use std::io::{self, Write};

/// A fixed-size toroidal grid of cells evolving under the B3/S23 rule.
///
/// Coordinates outside the grid are never an error: reading them reports a dead
/// cell and writing to them does nothing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    ///
    /// # Arguments
    /// * `rows` - The number of rows. Must be at least 1.
    /// * `cols` - The number of columns. Must be at least 1.
    pub fn new(rows: usize, cols: usize) -> Result<Grid> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }

        Ok(Grid {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Creates a grid from its map representation.
    ///
    /// The map declares its size with `rows` and `cols` lines, followed by one
    /// `m` line per row where `O` is a live cell and `.` a dead one:
    ///
    /// ```text
    /// rows 2
    /// cols 3
    /// m .O.
    /// m ...
    /// ```
    pub fn parse(map_contents: &str) -> Result<Grid> {
        let rows = header_value(map_contents, "rows")?;
        let cols = header_value(map_contents, "cols")?;

        let mut grid = Grid::new(rows, cols)?;

        let lines: Vec<&str> = row_regex()
            .captures_iter(map_contents)
            .filter_map(|captures| captures.get(1))
            .map(|line| line.as_str().trim())
            .collect();

        if lines.len() != rows {
            return Err(LifeError::Parse(format!(
                "expected {} rows but found {}",
                rows,
                lines.len()
            )));
        }

        for (row, line) in lines.into_iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(LifeError::Parse(format!(
                    "row {} has {} cells but expected {}",
                    row, width, cols
                )));
            }

            for (col, value) in line.chars().enumerate() {
                if Cell::from_char(value)?.is_alive() {
                    grid.grow_cell_at(row, col);
                }
            }
        }

        Ok(grid)
    }

    /// Creates a randomly seeded grid (a "soup").
    ///
    /// # Arguments
    /// * `density` - The probability of each cell starting alive, clamped to `[0, 1]`.
    /// * `rng` - The random number generator to draw from.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Grid> {
        let mut grid = Grid::new(rows, cols)?;
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };

        for cell in grid.cells.iter_mut() {
            *cell = rng.gen_bool(density);
        }

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn grow_cell_at(&mut self, row: usize, col: usize) {
        self.set(row, col, true);
    }

    pub fn kill_cell_at(&mut self, row: usize, col: usize) {
        self.set(row, col, false);
    }

    pub fn cell_at(&self, row: usize, col: usize) -> bool {
        if row < self.rows && col < self.cols {
            return self.cells[row * self.cols + col];
        }
        false
    }

    /// Counts the live cells among the 8 positions around the given one.
    ///
    /// Positions past an edge wrap around to the opposite edge, so the result is
    /// always in the range `0..=8`. A wrapped position landing back on the cell
    /// itself, as on a grid one row or one column wide, is not counted.
    /// A position outside the grid has no neighbors.
    pub fn neighbor_count(&self, row: usize, col: usize) -> usize {
        if row >= self.rows || col >= self.cols {
            return 0;
        }

        let mut count = 0;

        for i in -1..=1 {
            let x = wrap(row, i, self.rows - 1);

            for j in -1..=1 {
                let y = wrap(col, j, self.cols - 1);
                if x == row && y == col {
                    continue;
                }

                if self.cell_at(x, y) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Advances the grid by one generation.
    ///
    /// Every cell reads its neighbors from a copy of the previous generation, so
    /// all cells change simultaneously.
    pub fn update(&mut self) {
        let previous = self.clone();

        for (index, cell) in self.cells.iter_mut().enumerate() {
            let (row, col) = (index / previous.cols, index % previous.cols);
            *cell = next_state(
                previous.cell_at(row, col),
                previous.neighbor_count(row, col),
            );
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// Coordinates of every live cell, in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(index, _)| (index / self.cols, index % self.cols))
            .collect()
    }

    /// Grows a pattern with its top-left corner at the given location.
    ///
    /// Cells that fall past an edge wrap around to the opposite edge.
    pub fn place(&mut self, pattern: &Pattern, row: usize, col: usize) {
        let (row, col) = (row % self.rows, col % self.cols);
        for (d_row, d_col) in pattern.cells {
            self.grow_cell_at(
                (row + d_row % self.rows) % self.rows,
                (col + d_col % self.cols) % self.cols,
            );
        }
    }

    /// Writes the grid in the format read by [`Grid::parse`].
    pub fn to_map(&self) -> String {
        let mut map = format!("rows {}\ncols {}\n", self.rows, self.cols);
        for line in self.to_string().lines() {
            map.push_str("m ");
            map.push_str(line);
            map.push('\n');
        }
        map
    }

    /// Draws the grid, in color, to the given writer.
    ///
    /// # Arguments
    /// * `out` - Where to draw, usually `stdout`.
    /// * `generation` - The generation number shown above the grid.
    pub fn draw<W: Write>(&self, out: &mut W, generation: usize) -> io::Result<()> {
        queue!(
            out,
            Print("Generation: "),
            Print(generation.to_string()),
            Print("\nPopulation: "),
            Print(self.population().to_string()),
            Print("\n\n")
        )?;

        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Cell::from(self.cell_at(row, col));
                queue!(
                    out,
                    SetForegroundColor(cell.color()),
                    Print(cell.char()),
                    SetForegroundColor(Color::Reset)
                )?;
            }
            queue!(out, Print("\n"))?;
        }

        out.flush()
    }

    fn set(&mut self, row: usize, col: usize, value: bool) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = value;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for alive in row {
                write!(f, "{}", Cell::from(*alive).char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// B3/S23: a live cell survives with 2 or 3 neighbors, a dead cell is born with exactly 3.
fn next_state(alive: bool, neighbors: usize) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Moves `value` by `offset`, sending positions before 0 to `max` and positions past `max` to 0.
fn wrap(value: usize, offset: isize, max: usize) -> usize {
    match value.checked_add_signed(offset) {
        Some(moved) if moved <= max => moved,
        Some(_) => 0,
        None if offset < 0 => max,
        None => 0,
    }
}

fn header_value(map_contents: &str, name: &str) -> Result<usize> {
    let pattern = Regex::new(&format!(r"(?m)^\s*{} (\d+)\s*$", name))
        .map_err(|e| LifeError::Parse(e.to_string()))?;

    let value = pattern
        .captures(map_contents)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| LifeError::Parse(format!("missing `{}` header", name)))?;

    value
        .as_str()
        .parse::<usize>()
        .map_err(|e| LifeError::Parse(format!("invalid `{}` value: {}", name, e)))
}

fn row_regex() -> Regex {
    // The pattern is a literal, so compiling it cannot fail
    Regex::new(r"(?m)^\s*m (.*)$").unwrap()
}
