//! Server state management
//!
//! Shared, read-mostly configuration for the move-selection routes plus a
//! served-request counter for the status endpoint.

use hexlink_core::StrategyConfig;
use std::sync::atomic::{AtomicU64, Ordering};

/// Server-wide shared state
pub struct ServerState {
    pub strategy_config: StrategyConfig,
    moves_served: AtomicU64,
}

impl ServerState {
    pub fn new() -> Self {
        Self::with_config(StrategyConfig::default())
    }

    pub fn with_config(strategy_config: StrategyConfig) -> Self {
        Self {
            strategy_config,
            moves_served: AtomicU64::new(0),
        }
    }

    pub fn record_move_served(&self) {
        self.moves_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn moves_served(&self) -> u64 {
        self.moves_served.load(Ordering::Relaxed)
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
