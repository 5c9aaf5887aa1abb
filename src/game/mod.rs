pub mod board;
pub mod controller;
pub mod round_state;
pub mod snapshot;
pub mod symbol;
pub mod tile;
