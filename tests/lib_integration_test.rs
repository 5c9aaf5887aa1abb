//! Integration tests for the memory game library public API

use memory_game::{
    GameConfig, MemoryGameError, Result, SessionManager, WebUiConfig, WebUiServer, DESCRIPTION,
    NAME, VERSION,
};

#[test]
fn test_library_metadata() {
    assert!(!VERSION.is_empty());
    assert_eq!(NAME, "memory_game");
    assert!(!DESCRIPTION.is_empty());
}

#[test]
fn test_error_types() {
    let not_found = MemoryGameError::SessionNotFound("abc".to_string());
    assert_eq!(not_found.to_string(), "Session not found: abc");

    let out_of_range = MemoryGameError::TileOutOfRange { index: 40, len: 36 };
    assert_eq!(
        out_of_range.to_string(),
        "Tile 40 is out of range for a board of 36 tiles"
    );

    let io: MemoryGameError = std::io::Error::other("disk").into();
    assert!(matches!(io, MemoryGameError::Io(_)));
}

#[test]
fn test_result_type_alias() {
    let success: Result<i32> = Ok(42);
    assert_eq!(success.unwrap(), 42);

    let failure: Result<i32> = Err(MemoryGameError::Server("test".to_string()));
    assert!(failure.is_err());
}

#[test]
fn test_web_ui_server_creation() {
    let config = WebUiConfig {
        port: 8080,
        host: "127.0.0.1".to_string(),
        ..Default::default()
    };
    let sessions = SessionManager::new(GameConfig::default());

    let server = WebUiServer::new(config, sessions);
    assert_eq!(server.config().port, 8080);
    let _router = server.create_router();
}
