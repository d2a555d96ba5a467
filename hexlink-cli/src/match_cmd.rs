//! Match command - self-play games between two difficulty tiers
//!
//! Red moves first and connects left-right; Blue connects top-bottom.
//! Useful for comparing strategies and tuning the playout budget.

use anyhow::Result;
use clap::Args;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use hexlink_core::{is_connected, strategy_for, Board, Difficulty, Player, StrategyConfig};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Strategy for Red (random, heuristic, simulated)
    #[arg(long, default_value = "heuristic")]
    pub red: Difficulty,

    /// Strategy for Blue (random, heuristic, simulated)
    #[arg(long, default_value = "simulated")]
    pub blue: Difficulty,

    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Board size
    #[arg(long, default_value = "11")]
    pub size: usize,

    /// Playouts per candidate for the simulated strategy
    #[arg(long, default_value = "25")]
    pub trials: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug, Serialize)]
struct GameRecord {
    game_number: usize,
    winner: Player,
    moves: u32,
}

/// Aggregated match results
#[derive(Clone, Debug, Serialize)]
struct MatchResults {
    red: String,
    blue: String,
    games: Vec<GameRecord>,
    red_wins: usize,
    blue_wins: usize,
    avg_moves: f32,
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

/// Run match command
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    anyhow::ensure!(args.size >= 1, "board size must be at least 1");

    tracing::info!(
        "Starting match: red={} vs blue={} ({} games, size {}, {} trials)",
        args.red,
        args.blue,
        args.games,
        args.size,
        args.trials
    );

    let results = play_match(&args, seed)?;
    report_results(&results, &args)?;

    Ok(())
}

// ============================================================================
// MATCH PLAY
// ============================================================================

fn play_match(args: &MatchArgs, seed: Option<u64>) -> Result<MatchResults> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    let config = StrategyConfig {
        trials: args.trials,
        ..StrategyConfig::default()
    };

    let mut games = Vec::with_capacity(args.games);
    for game_num in 0..args.games {
        let record = play_single_game(game_num + 1, args, &config, &mut rng)?;
        tracing::info!(
            "Game {}: {:?} wins in {} moves",
            record.game_number,
            record.winner,
            record.moves
        );
        games.push(record);
    }

    Ok(compute_statistics(args, games))
}

/// Play one game to completion. Hex cannot end drawn: by the time the board
/// fills, exactly one player spans their edges, and the exact reachability
/// check fires on the move that completes the chain.
fn play_single_game(
    game_number: usize,
    args: &MatchArgs,
    config: &StrategyConfig,
    rng: &mut ChaCha8Rng,
) -> Result<GameRecord> {
    let mut red = strategy_for(args.red, config.clone(), Some(rng.gen()));
    let mut blue = strategy_for(args.blue, config.clone(), Some(rng.gen()));

    let mut board = Board::new(args.size);
    let mut current = Player::Red;
    let mut moves = 0u32;

    loop {
        let strategy = match current {
            Player::Red => &mut red,
            Player::Blue => &mut blue,
        };
        let mv = strategy
            .select_move(&board, current)
            .ok_or_else(|| anyhow::anyhow!("board exhausted without a winner"))?;

        board.place(mv, current);
        moves += 1;

        if is_connected(&board, current) {
            return Ok(GameRecord {
                game_number,
                winner: current,
                moves,
            });
        }
        current = current.opponent();
    }
}

fn compute_statistics(args: &MatchArgs, games: Vec<GameRecord>) -> MatchResults {
    let red_wins = games.iter().filter(|g| g.winner == Player::Red).count();
    let blue_wins = games.len() - red_wins;
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        games.iter().map(|g| g.moves as f32).sum::<f32>() / games.len() as f32
    };

    MatchResults {
        red: args.red.to_string(),
        blue: args.blue.to_string(),
        games,
        red_wins,
        blue_wins,
        avg_moves,
    }
}

// ============================================================================
// REPORTING
// ============================================================================

fn report_results(results: &MatchResults, args: &MatchArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    println!("Match: red={} vs blue={}", results.red, results.blue);
    println!(
        "  Red wins:  {:3} ({:.0}%)",
        results.red_wins,
        percentage(results.red_wins, results.games.len())
    );
    println!(
        "  Blue wins: {:3} ({:.0}%)",
        results.blue_wins,
        percentage(results.blue_wins, results.games.len())
    );
    println!("  Avg game length: {:.1} moves", results.avg_moves);

    Ok(())
}

fn percentage(part: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        part as f32 / total as f32 * 100.0
    }
}

// ============================================================================
// TESTS
// ============================================================================
