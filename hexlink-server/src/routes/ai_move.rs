//! Move-selection endpoint
//!
//! Deserializes (board, size, player, difficulty), validates the board
//! shape, and dispatches to the core. Every fault comes back as a
//! structured `{"success": false, "error": ...}` body; the serving process
//! never crashes on a bad request.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use hexlink_core::{select_move, Board, Coord, Difficulty, Player};

use crate::state::ServerState;

#[derive(Deserialize)]
pub struct AiMoveRequest {
    /// Serialized rows, `board[r][q]` in {null, "red", "blue"}
    pub board: Vec<Vec<Option<Player>>>,
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
    #[serde(default = "default_player")]
    pub player: Player,
}

fn default_size() -> usize {
    11
}

fn default_difficulty() -> Difficulty {
    Difficulty::Heuristic
}

fn default_player() -> Player {
    Player::Blue
}

#[derive(Serialize)]
pub struct AiMoveResponse {
    pub success: bool,
    /// Present on success; `null` means the board is full (no move exists)
    #[serde(rename = "move", skip_serializing_if = "Option::is_none")]
    pub chosen: Option<Option<Coord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AiMoveResponse {
    fn success(chosen: Option<Coord>) -> Self {
        Self {
            success: true,
            chosen: Some(chosen),
            error: None,
        }
    }

    fn failure(error: String) -> Self {
        Self {
            success: false,
            chosen: None,
            error: Some(error),
        }
    }
}

pub async fn get_ai_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<AiMoveRequest>,
) -> Json<AiMoveResponse> {
    let AiMoveRequest {
        board,
        size,
        difficulty,
        player,
    } = req;

    let board = match Board::from_rows(board, size) {
        Ok(board) => board,
        Err(e) => {
            tracing::warn!("rejected malformed board: {e}");
            return Json(AiMoveResponse::failure(e.to_string()));
        }
    };

    let config = state.strategy_config.clone();

    // Move selection is pure CPU work; keep it off the async workers
    let result =
        tokio::task::spawn_blocking(move || select_move(&board, player, difficulty, &config)).await;

    match result {
        Ok(chosen) => {
            state.record_move_served();
            tracing::debug!(?chosen, %difficulty, ?player, "selected move");
            Json(AiMoveResponse::success(chosen))
        }
        Err(e) => {
            tracing::error!("move selection task failed: {e}");
            Json(AiMoveResponse::failure(format!(
                "move selection failed: {e}"
            )))
        }
    }
}
