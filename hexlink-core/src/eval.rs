//! Candidate scoring heuristics
//!
//! Cheap, bounded sub-scores combined by weight. Exact reachability is
//! deliberately left to the playout phase; the macro-path score here is an
//! edge-occupancy proxy only.

use crate::board::{Board, Coord, Player};
use serde::{Deserialize, Serialize};

/// Relative weights for the candidate score.
///
/// The position sub-score carries implicit weight 1; `win_rate` scales the
/// Monte Carlo estimate added on top by the simulation-ranked strategy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub adjacency: f32,
    pub edge_presence: f32,
    pub win_rate: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            adjacency: 2.0,
            edge_presence: 3.0,
            win_rate: 10.0,
        }
    }
}

/// Position sub-score: proximity to the board center plus proximity to the
/// nearer of the player's two target edges. Both terms are bounded by the
/// board size so the weights in [`ScoreWeights`] stay meaningful.
pub fn position_score(c: Coord, size: usize, player: Player) -> f32 {
    let center = (size / 2) as f32;
    let dq = c.q as f32 - center;
    let dr = c.r as f32 - center;
    let distance_to_center = (dq * dq + dr * dr).sqrt();
    let center_score = 1.0 - distance_to_center / (size as f32 * 1.5);

    let edge_distance = match player {
        Player::Red => c.q.min(size - 1 - c.q),
        Player::Blue => c.r.min(size - 1 - c.r),
    };
    let edge_score = edge_distance as f32 / size as f32;

    center_score + edge_score
}

/// Fraction of the up-to-six neighbors already owned by `player`, in [0,1].
pub fn adjacency_score(board: &Board, c: Coord, player: Player) -> f32 {
    let owned = board
        .neighbors(c)
        .filter(|&nb| board.get(nb) == Some(player))
        .count();
    owned as f32 / 6.0
}

/// Macro-path sub-score: 1.0 if `player` has a stone on each of its two
/// target edges (anywhere, connectivity ignored), 0.5 for exactly one edge,
/// 0.0 otherwise.
pub fn edge_presence_score(board: &Board, player: Player) -> f32 {
    let n = board.size();
    let mut near = false;
    let mut far = false;
    for i in 0..n {
        let (start, end) = match player {
            Player::Red => (Coord::new(0, i), Coord::new(n - 1, i)),
            Player::Blue => (Coord::new(i, 0), Coord::new(i, n - 1)),
        };
        near |= board.get(start) == Some(player);
        far |= board.get(end) == Some(player);
    }
    match (near, far) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.5,
        (false, false) => 0.0,
    }
}

/// Weighted heuristic score for playing `player` at the empty cell `c`.
///
/// The stone is placed on a private copy; the caller's board is never
/// mutated. The adjacency and macro-path terms see the post-move board.
pub fn score_candidate(board: &Board, c: Coord, player: Player, weights: &ScoreWeights) -> f32 {
    let mut after = board.clone();
    after.place(c, player);

    position_score(c, board.size(), player)
        + weights.adjacency * adjacency_score(&after, c, player)
        + weights.edge_presence * edge_presence_score(&after, player)
}
