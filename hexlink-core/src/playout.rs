//! Monte Carlo playout simulation
//!
//! Zero-ply rollouts: fill the remaining empty cells in a uniformly random
//! alternating order and check the exact win condition on the full board.
//! No move ordering, no pruning, no tree.

use crate::board::{Board, Player};
use crate::connect::is_connected;
use rand::seq::SliceRandom;
use rand::Rng;

/// Reference trial count; higher counts trade latency for lower variance.
pub const DEFAULT_TRIALS: u32 = 100;

/// Estimate the win probability for `player` on a board that already
/// contains the candidate move, by running `trials` random completions.
/// Returns wins/trials in [0,1].
pub fn simulate_win_rate<R: Rng>(board: &Board, player: Player, trials: u32, rng: &mut R) -> f32 {
    if trials == 0 {
        return 0.0;
    }
    let mut wins = 0u32;
    for _ in 0..trials {
        if random_completion_wins(board, player, rng) {
            wins += 1;
        }
    }
    wins as f32 / trials as f32
}

/// One playout: clone the board, shuffle the empty cells, assign them
/// alternately starting with the opponent (the candidate stone was the
/// player's turn), then test reachability for `player`.
fn random_completion_wins<R: Rng>(board: &Board, player: Player, rng: &mut R) -> bool {
    let mut sim = board.clone();
    let mut empty = sim.empty_cells();
    empty.shuffle(rng);

    let mut turn = player.opponent();
    for c in empty {
        sim.place(c, turn);
        turn = turn.opponent();
    }

    is_connected(&sim, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_win_rate_bounds() {
        let mut board = Board::new(4);
        board.place(Coord::new(1, 1), Player::Red);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for trials in [1, 10, 100] {
            let rate = simulate_win_rate(&board, Player::Red, trials, &mut rng);
            assert!((0.0..=1.0).contains(&rate), "rate {rate} out of bounds");
        }
    }

    #[test]
    fn test_already_connected_always_wins() {
        // A completed chain survives any completion of the empty cells
        let mut board = Board::new(3);
        for q in 0..3 {
            board.place(Coord::new(q, 1), Player::Red);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(simulate_win_rate(&board, Player::Red, 50, &mut rng), 1.0);
    }

    #[test]
    fn test_hopeless_position_never_wins() {
        // Blue owns everything except one cell; the opponent fills it first
        let mut board = Board::new(2);
        board.place(Coord::new(0, 0), Player::Blue);
        board.place(Coord::new(1, 0), Player::Blue);
        board.place(Coord::new(0, 1), Player::Blue);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(simulate_win_rate(&board, Player::Red, 20, &mut rng), 0.0);
    }

    #[test]
    fn test_full_board_is_deterministic() {
        let mut board = Board::new(2);
        board.place(Coord::new(0, 0), Player::Red);
        board.place(Coord::new(1, 0), Player::Red);
        board.place(Coord::new(0, 1), Player::Blue);
        board.place(Coord::new(1, 1), Player::Blue);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(simulate_win_rate(&board, Player::Red, 5, &mut rng), 1.0);
        assert_eq!(simulate_win_rate(&board, Player::Blue, 5, &mut rng), 0.0);
    }

    #[test]
    fn test_playout_does_not_mutate_input() {
        let mut board = Board::new(3);
        board.place(Coord::new(1, 1), Player::Blue);
        let before = board.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let _ = simulate_win_rate(&board, Player::Blue, 10, &mut rng);
        assert_eq!(board, before);
    }
}
