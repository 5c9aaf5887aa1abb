use crate::game::board::Board;
use crate::game::round_state::{RoundPhase, RoundState};
use crate::game::symbol::Symbol;
use crate::game::tile::Tile;
use serde::{Deserialize, Serialize};

/// Tile as the outside world may see it: face-down tiles carry no symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub symbol: Option<Symbol>,
    pub is_revealed: bool,
    pub is_matched: bool,
}

impl From<&Tile> for TileSnapshot {
    fn from(tile: &Tile) -> Self {
        Self {
            symbol: tile.is_face_up().then_some(tile.symbol),
            is_revealed: tile.is_revealed,
            is_matched: tile.is_matched,
        }
    }
}

/// Read-only copy of a controller, handed to views and API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub tiles: Vec<TileSnapshot>,
    pub pending_selection: Vec<usize>,
    pub move_count: u32,
    pub elapsed_seconds: u64,
    pub is_timer_running: bool,
    pub is_intro_visible: bool,
    pub phase: RoundPhase,
    pub generation: u64,
}

pub fn build_snapshot(board: &Board, round: &RoundState, phase: RoundPhase) -> GameSnapshot {
    GameSnapshot {
        tiles: board.tiles().iter().map(TileSnapshot::from).collect(),
        pending_selection: round.pending_selection.clone(),
        move_count: round.move_count,
        elapsed_seconds: round.elapsed_seconds,
        is_timer_running: round.is_timer_running,
        is_intro_visible: round.is_intro_visible,
        phase,
        generation: round.generation,
    }
}

impl GameSnapshot {
    pub fn is_solved(&self) -> bool {
        self.phase == RoundPhase::Solved
    }
}
