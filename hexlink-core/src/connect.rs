//! Edge-to-edge reachability
//!
//! The exact win condition for Hex, also used to score playouts: does a
//! player own a connected chain of stones spanning their two target edges?

use crate::board::{Board, Coord, Player};

/// True iff `player` owns a chain of mutually adjacent stones from their
/// start edge to their far edge (Red: column 0 to column N-1, Blue: row 0
/// to row N-1).
///
/// Iterative depth-first search seeded from every owned cell on the start
/// edge. Each cell is visited at most once, bounding the search to O(N^2).
pub fn is_connected(board: &Board, player: Player) -> bool {
    let n = board.size();
    if n == 0 {
        return false;
    }

    let mut visited = vec![false; n * n];
    let mut stack: Vec<Coord> = Vec::new();

    for i in 0..n {
        let seed = match player {
            Player::Red => Coord::new(0, i),
            Player::Blue => Coord::new(i, 0),
        };
        if board.get(seed) == Some(player) {
            visited[seed.r * n + seed.q] = true;
            stack.push(seed);
        }
    }

    while let Some(c) = stack.pop() {
        let reached_far_edge = match player {
            Player::Red => c.q == n - 1,
            Player::Blue => c.r == n - 1,
        };
        if reached_far_edge {
            return true;
        }
        for nb in board.neighbors(c) {
            let idx = nb.r * n + nb.q;
            if !visited[idx] && board.get(nb) == Some(player) {
                visited[idx] = true;
                stack.push(nb);
            }
        }
    }

    false
}
