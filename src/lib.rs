//! # Memory Game Library
//!
//! A memory-matching (concentration) game: face-down tiles hide emoji pairs,
//! the player reveals two per turn, matched pairs stay up and mismatched pairs
//! flip back after a delay while a clock and a move counter run.
//!
//! ## Features
//!
//! - **Game Engine**: symbol alphabet, board shuffling and the round state machine
//! - **Sessions**: one controller per browser tab, with tokio-driven timer and flip-backs
//! - **Views**: pure HTML renderers for tiles, header and stats
//! - **Web UI**: axum server with an intent API and a server-sent-events stream
//!
//! ## Usage
//!
//! ```rust
//! use memory_game::{
//!     game::controller::GameController,
//!     game::symbol::Symbol,
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut game = GameController::new(&Symbol::ALL, StdRng::seed_from_u64(7));
//! game.select_tile(0);
//! assert_eq!(game.board().len(), 36);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic and rules
pub mod game;

/// Game and server configuration
pub mod config;

/// Game sessions and their timer tasks
pub mod services;

/// HTML renderers
pub mod views;

/// Server components (Web UI)
pub mod servers;

/// Logger setup
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use config::GameConfig;
pub use game::controller::GameController;
pub use servers::{WebUiConfig, WebUiServer};
pub use services::{GameSession, SessionManager};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the memory game library
#[derive(Debug, thiserror::Error)]
pub enum MemoryGameError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Tile {index} is out of range for a board of {len} tiles")]
    TileOutOfRange { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MemoryGameError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
