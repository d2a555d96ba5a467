//! Move-selection strategies
//!
//! Three interchangeable strategies behind the [`MoveStrategy`] trait:
//! uniform random, tiered heuristic, and simulation-ranked. The trait is
//! also the substitution seam for externally supplied strategies; loading
//! such code is the caller's problem, not this crate's.

use crate::board::{Board, Coord, Player};
use crate::eval::{score_candidate, ScoreWeights};
use crate::playout::{simulate_win_rate, DEFAULT_TRIALS};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// DIFFICULTY
// ============================================================================

/// Strategy tier, selected once per call.
///
/// The wire names are `random` / `heuristic` / `simulated`; the historical
/// `easy` / `medium` / `hard` spellings are accepted as aliases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "easy")]
    Random,
    #[serde(alias = "medium")]
    Heuristic,
    #[serde(alias = "hard")]
    Simulated,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Random => "random",
            Difficulty::Heuristic => "heuristic",
            Difficulty::Simulated => "simulated",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" | "easy" => Ok(Difficulty::Random),
            "heuristic" | "medium" => Ok(Difficulty::Heuristic),
            "simulated" | "hard" => Ok(Difficulty::Simulated),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Tunable strategy parameters.
///
/// The tier-acceptance probabilities are not grounded in Hex theory; the
/// defaults reproduce the historical behavior and are kept configurable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Playouts per candidate for the simulation-ranked strategy
    pub trials: u32,
    /// Acceptance probability for candidates adjacent to an own stone
    pub friendly_accept: f64,
    /// Acceptance probability for candidates adjacent to an opponent stone
    pub blocking_accept: f64,
    /// Acceptance probability for the edge-cell tier
    pub edge_accept: f64,
    pub weights: ScoreWeights,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            friendly_accept: 0.7,
            blocking_accept: 0.6,
            edge_accept: 0.4,
            weights: ScoreWeights::default(),
        }
    }
}

// ============================================================================
// STRATEGY TRAIT
// ============================================================================

/// A move-selection strategy.
///
/// Contract: if the board has any empty cell the result names one of them;
/// a full board yields `None`. Implementations read the board and work on
/// private copies; the input is never mutated.
pub trait MoveStrategy {
    fn name(&self) -> &'static str;

    fn select_move(&mut self, board: &Board, player: Player) -> Option<Coord>;
}

/// Build the strategy for a difficulty tier.
///
/// `seed` fixes the RNG for reproducible play; `None` seeds from entropy.
pub fn strategy_for(
    difficulty: Difficulty,
    config: StrategyConfig,
    seed: Option<u64>,
) -> Box<dyn MoveStrategy + Send> {
    let rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    match difficulty {
        Difficulty::Random => Box::new(RandomStrategy { rng }),
        Difficulty::Heuristic => Box::new(HeuristicStrategy { config, rng }),
        Difficulty::Simulated => Box::new(MonteCarloStrategy { config, rng }),
    }
}

/// One-shot convenience wrapper around [`strategy_for`].
pub fn select_move(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    config: &StrategyConfig,
) -> Option<Coord> {
    strategy_for(difficulty, config.clone(), None).select_move(board, player)
}

// ============================================================================
// RANDOM STRATEGY
// ============================================================================

/// Uniform random choice over the empty cells.
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_move(&mut self, board: &Board, _player: Player) -> Option<Coord> {
        board.empty_cells().choose(&mut self.rng).copied()
    }
}

// ============================================================================
// HEURISTIC STRATEGY
// ============================================================================

/// Tiered probabilistic heuristic.
///
/// Opening: the exact center cell (`N/2`, truncating, so even sizes round
/// toward the lower index). Otherwise the tiers run in order, each scanning
/// candidates row-major: extend an own group (p = `friendly_accept` per
/// candidate), block an opponent group (p = `blocking_accept`), grab an
/// edge cell (one roll at p = `edge_accept`), and finally uniform random.
/// A call can fall through several tiers; that nondeterminism is intended.
pub struct HeuristicStrategy {
    config: StrategyConfig,
    rng: ChaCha8Rng,
}

impl HeuristicStrategy {
    pub fn new(config: StrategyConfig) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(config: StrategyConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl MoveStrategy for HeuristicStrategy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn select_move(&mut self, board: &Board, player: Player) -> Option<Coord> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let n = board.size();
        if empty.len() == n * n {
            return Some(Coord::new(n / 2, n / 2));
        }

        for &c in &empty {
            if has_adjacent_stone(board, c, player)
                && self.rng.gen::<f64>() < self.config.friendly_accept
            {
                return Some(c);
            }
        }

        let opponent = player.opponent();
        for &c in &empty {
            if has_adjacent_stone(board, c, opponent)
                && self.rng.gen::<f64>() < self.config.blocking_accept
            {
                return Some(c);
            }
        }

        let edge_cells: Vec<Coord> = empty
            .iter()
            .copied()
            .filter(|&c| board.is_edge_cell(c))
            .collect();
        if !edge_cells.is_empty() && self.rng.gen::<f64>() < self.config.edge_accept {
            return edge_cells.choose(&mut self.rng).copied();
        }

        empty.choose(&mut self.rng).copied()
    }
}

/// Whether any neighbor of `c` holds a stone of `who`.
fn has_adjacent_stone(board: &Board, c: Coord, who: Player) -> bool {
    board.neighbors(c).any(|nb| board.get(nb) == Some(who))
}

// ============================================================================
// MONTE CARLO STRATEGY
// ============================================================================

/// Simulation-ranked strategy.
///
/// Openings are special-cased (center on an empty board, point reflection
/// of a non-center opponent opener as a pie-rule counter). Every other
/// empty cell is ranked by heuristic score plus `win_rate` times the playout
/// estimate; the strictly greatest total wins, first-seen on ties.
pub struct MonteCarloStrategy {
    config: StrategyConfig,
    rng: ChaCha8Rng,
}

impl MonteCarloStrategy {
    pub fn new(config: StrategyConfig) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(config: StrategyConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pie-rule approximation: with exactly one stone on the board, owned
    /// by the opponent and off-center, answer with its point reflection.
    fn swap_response(&self, board: &Board, player: Player) -> Option<Coord> {
        let n = board.size();
        let center = Coord::new(n / 2, n / 2);
        for r in 0..n {
            for q in 0..n {
                let c = Coord::new(q, r);
                if let Some(owner) = board.get(c) {
                    if owner == player.opponent() && c != center {
                        return Some(Coord::new(n - 1 - c.q, n - 1 - c.r));
                    }
                    return None;
                }
            }
        }
        None
    }

    #[cfg(feature = "parallel")]
    fn rank_candidates(&mut self, board: &Board, player: Player, empty: &[Coord]) -> Option<Coord> {
        use rayon::prelude::*;

        // Candidate evaluations are independent; each gets a derived seed
        let base_seed: u64 = self.rng.gen();
        let config = &self.config;
        let scores: Vec<f32> = empty
            .par_iter()
            .enumerate()
            .map(|(i, &c)| {
                let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(i as u64));
                evaluate_candidate(board, c, player, config, &mut rng)
            })
            .collect();
        pick_best(empty, &scores)
    }

    #[cfg(not(feature = "parallel"))]
    fn rank_candidates(&mut self, board: &Board, player: Player, empty: &[Coord]) -> Option<Coord> {
        let mut scores = Vec::with_capacity(empty.len());
        for &c in empty {
            scores.push(evaluate_candidate(
                board,
                c,
                player,
                &self.config,
                &mut self.rng,
            ));
        }
        pick_best(empty, &scores)
    }
}

impl MoveStrategy for MonteCarloStrategy {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn select_move(&mut self, board: &Board, player: Player) -> Option<Coord> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let n = board.size();
        if empty.len() == n * n {
            return Some(Coord::new(n / 2, n / 2));
        }
        if board.stone_count() == 1 {
            if let Some(c) = self.swap_response(board, player) {
                return Some(c);
            }
        }

        self.rank_candidates(board, player, &empty)
            .or_else(|| empty.choose(&mut self.rng).copied())
    }
}

/// Full score for one candidate: heuristic terms plus the weighted Monte
/// Carlo win-rate estimate on the post-move board.
fn evaluate_candidate<R: Rng>(
    board: &Board,
    c: Coord,
    player: Player,
    config: &StrategyConfig,
    rng: &mut R,
) -> f32 {
    let heuristic = score_candidate(board, c, player, &config.weights);
    let mut after = board.clone();
    after.place(c, player);
    let win_rate = simulate_win_rate(&after, player, config.trials, rng);
    heuristic + config.weights.win_rate * win_rate
}

/// Argmax over candidate scores; only a strictly greater score displaces
/// the incumbent, so ties go to the earlier (row-major) candidate.
fn pick_best(empty: &[Coord], scores: &[f32]) -> Option<Coord> {
    let mut best: Option<(Coord, f32)> = None;
    for (&c, &score) in empty.iter().zip(scores) {
        match best {
            Some((_, incumbent)) if score <= incumbent => {}
            _ => best = Some((c, score)),
        }
    }
    best.map(|(c, _)| c)
}

// ============================================================================
// TESTS
// ============================================================================
