use crate::error::{LifeError, Result};
use crossterm::style::Color;

/// The state of a single cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Alive,
    Dead,
}

impl Cell {
    pub const ALIVE_CHAR: char = 'O';
    pub const DEAD_CHAR: char = '.';

    pub fn from_char(value: char) -> Result<Cell> {
        match value {
            Cell::ALIVE_CHAR => Ok(Cell::Alive),
            Cell::DEAD_CHAR => Ok(Cell::Dead),
            _ => Err(LifeError::InvalidCell(value)),
        }
    }

    pub fn char(&self) -> char {
        match self {
            Cell::Alive => Cell::ALIVE_CHAR,
            Cell::Dead => Cell::DEAD_CHAR,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Cell::Alive => Color::Green,
            Cell::Dead => Color::DarkGrey,
        }
    }

    pub fn is_alive(&self) -> bool {
        matches!(self, Cell::Alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}
