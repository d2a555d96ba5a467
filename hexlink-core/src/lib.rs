//! hexlink Core - Hex move-selection engine
//!
//! This crate provides the move-selection core for the Hex connection game:
//! - Board model (N x N grid with hexagonal adjacency)
//! - Exact edge-to-edge reachability (win detection)
//! - Position / connectivity scoring
//! - Monte Carlo playout simulation
//! - Three interchangeable move-selection strategies

pub mod board;
pub mod connect;
pub mod eval;
pub mod playout;
pub mod strategy;

// Re-exports for convenient access
pub use board::{Board, BoardError, Coord, Player, DIRECTIONS};
pub use connect::is_connected;
pub use eval::{score_candidate, ScoreWeights};
pub use playout::{simulate_win_rate, DEFAULT_TRIALS};
pub use strategy::{
    select_move, strategy_for, Difficulty, HeuristicStrategy, MonteCarloStrategy, MoveStrategy,
    RandomStrategy, StrategyConfig,
};
