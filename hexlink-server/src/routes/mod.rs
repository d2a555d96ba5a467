//! HTTP route handlers

pub mod ai_move;
pub mod status;
