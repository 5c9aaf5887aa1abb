pub mod game_session;
pub mod session_manager;

pub use game_session::GameSession;
pub use session_manager::SessionManager;
