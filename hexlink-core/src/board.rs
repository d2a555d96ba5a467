//! Hex board model: N x N grid with hexagonal adjacency
//!
//! The hexagonal topology is mapped onto a square array; each cell has up
//! to six neighbors given by [`DIRECTIONS`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two players and their target edge pairs.
///
/// Red connects the left and right columns, Blue the top and bottom rows.
/// The assignment is fixed; it is never configured per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }
}

/// Cell coordinates: column `q`, row `r`, each in `[0, N)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub q: usize,
    pub r: usize,
}

impl Coord {
    pub const fn new(q: usize, r: usize) -> Self {
        Self { q, r }
    }
}

/// Neighbor offsets (dq, dr) for the hexagonal topology.
///
/// Every component (reachability, scoring, playouts) shares this single
/// adjacency definition. No wraparound.
pub const DIRECTIONS: [(i32, i32); 6] = [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, 1), (1, -1)];

/// Errors raised when constructing a board from caller-supplied rows.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board size must be at least 1")]
    EmptyBoard,
    #[error("expected {expected} rows, got {actual}")]
    RowCountMismatch { expected: usize, actual: usize },
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// An N x N Hex board.
///
/// Cells are stored row-major; `None` is an empty cell. The evaluation code
/// never mutates a caller's board: simulation works on private clones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Create an empty board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from serialized rows (`rows[r][q]`), validating that
    /// the grid is square and matches the declared size.
    pub fn from_rows(rows: Vec<Vec<Option<Player>>>, size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if rows.len() != size {
            return Err(BoardError::RowCountMismatch {
                expected: size,
                actual: rows.len(),
            });
        }
        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(BoardError::RowLengthMismatch {
                    row: r,
                    expected: size,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, c: Coord) -> Option<Player> {
        self.cells[c.r * self.size + c.q]
    }

    /// Place a stone. Occupancy is not checked; callers place only on cells
    /// they have already seen empty.
    pub fn place(&mut self, c: Coord, player: Player) {
        self.cells[c.r * self.size + c.q] = Some(player);
    }

    pub fn is_empty_cell(&self, c: Coord) -> bool {
        self.get(c).is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// All empty cells in row-major order (row 0 first, column 0 first
    /// within a row). Strategies rely on this enumeration order for
    /// tie-breaking and tier scans.
    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut out = Vec::new();
        for r in 0..self.size {
            for q in 0..self.size {
                let c = Coord::new(q, r);
                if self.is_empty_cell(c) {
                    out.push(c);
                }
            }
        }
        out
    }

    /// In-bounds neighbors of a cell, per [`DIRECTIONS`].
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size as i32;
        DIRECTIONS.iter().filter_map(move |&(dq, dr)| {
            let nq = c.q as i32 + dq;
            let nr = c.r as i32 + dr;
            if nq >= 0 && nq < size && nr >= 0 && nr < size {
                Some(Coord::new(nq as usize, nr as usize))
            } else {
                None
            }
        })
    }

    /// Whether a cell lies on any border of the board.
    pub fn is_edge_cell(&self, c: Coord) -> bool {
        c.q == 0 || c.q == self.size - 1 || c.r == 0 || c.r == self.size - 1
    }
}
