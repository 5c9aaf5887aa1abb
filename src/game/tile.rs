use crate::game::symbol::Symbol;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub symbol: Symbol,
    pub is_revealed: bool,
    pub is_matched: bool,
}

impl Tile {
    /// Face-down, unmatched tile.
    pub const fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            is_revealed: false,
            is_matched: false,
        }
    }

    pub fn is_face_up(&self) -> bool {
        self.is_revealed || self.is_matched
    }
}
