use crate::game::snapshot::GameSnapshot;
use crate::services::SessionManager;
use crate::views::{render_page, render_view, RenderedView};
use crate::MemoryGameError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, IntoResponse, Json, Response,
    },
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

// Structures pour l'API Web
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreatedGame {
    pub id: String,
    pub view: RenderedView,
}

// Configuration pour le serveur Web UI
#[derive(Debug, Clone)]
pub struct WebUiConfig {
    pub port: u16,
    pub host: String,
    /// Directory served under `/static`.
    pub web_dir: PathBuf,
}

impl Default for WebUiConfig {
    fn default() -> Self {
        Self {
            port: 51051,
            host: "0.0.0.0".to_string(),
            web_dir: PathBuf::from("web"),
        }
    }
}

#[derive(Clone)]
struct AppState {
    sessions: SessionManager,
}

// ============================================================================
// ERREURS HTTP
// ============================================================================

#[derive(Debug)]
pub struct ApiError(MemoryGameError);

impl From<MemoryGameError> for ApiError {
    fn from(err: MemoryGameError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MemoryGameError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            MemoryGameError::TileOutOfRange { .. } | MemoryGameError::InvalidConfig(_) => {
                StatusCode::BAD_REQUEST
            }
            MemoryGameError::Server(_) | MemoryGameError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            log::error!("❌ {}", self.0);
        } else {
            log::debug!("⚠️ {}", self.0);
        }

        let body = ApiResponse {
            status: "error".to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ============================================================================
// SERVEUR
// ============================================================================

pub struct WebUiServer {
    config: WebUiConfig,
    sessions: SessionManager,
}

impl WebUiServer {
    pub fn new(config: WebUiConfig, sessions: SessionManager) -> Self {
        Self { config, sessions }
    }

    pub fn config(&self) -> &WebUiConfig {
        &self.config
    }

    /// Serves until `shutdown` resolves.
    pub async fn start<F>(&self, shutdown: F) -> crate::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.create_router();
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e| {
                MemoryGameError::Server(format!(
                    "invalid listen address {}:{}: {}",
                    self.config.host, self.config.port, e
                ))
            })?;
        let listener = TcpListener::bind(addr).await?;

        log::info!(
            "🌐 Memory game UI on http://localhost:{}",
            self.config.port
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        log::info!("👋 Web UI server stopped");
        Ok(())
    }

    pub fn create_router(&self) -> Router {
        build_router(self.sessions.clone(), self.config.web_dir.clone())
    }
}

pub fn build_router(sessions: SessionManager, web_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/status", get(api_status))
        .route("/api/games", post(create_game))
        .route("/api/games/{id}", get(game_snapshot).delete(close_game))
        .route("/api/games/{id}/view", get(game_view))
        .route("/api/games/{id}/events", get(game_events))
        .route("/api/games/{id}/select/{index}", post(select_tile))
        .route("/api/games/{id}/restart", post(restart_game))
        .route("/api/games/{id}/new-game", post(new_game))
        .route("/api/games/{id}/start", post(start_game))
        .nest_service("/static", ServeDir::new(web_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(AppState { sessions })
}

// ============================================================================
// HANDLERS
// ============================================================================

async fn serve_index(State(state): State<AppState>) -> Html<String> {
    let session = state.sessions.create_session().await;
    let snapshot = session.snapshot().await;
    Html(render_page(session.id(), &snapshot))
}

async fn api_status(State(state): State<AppState>) -> Json<ApiResponse> {
    let active = state.sessions.session_count().await;
    Json(ApiResponse {
        status: "ready".to_string(),
        message: format!("Memory game server is running ({} active sessions)", active),
    })
}

async fn create_game(State(state): State<AppState>) -> Json<CreatedGame> {
    let session = state.sessions.create_session().await;
    let snapshot = session.snapshot().await;
    Json(CreatedGame {
        id: session.id().to_string(),
        view: render_view(&snapshot),
    })
}

async fn game_snapshot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let session = state.sessions.get_session(&id).await?;
    Ok(Json(session.snapshot().await))
}

async fn game_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RenderedView>, ApiError> {
    let session = state.sessions.get_session(&id).await?;
    Ok(Json(render_view(&session.snapshot().await)))
}

async fn game_events(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    let session = state.sessions.get_session(&id).await?;
    log::debug!("📡 [{}] view stream opened", id);

    let stream = WatchStream::new(session.subscribe())
        .map(|snapshot| Event::default().event("view").json_data(render_view(&snapshot)));
    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

async fn select_tile(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<RenderedView>, ApiError> {
    let session = state.sessions.get_session(&id).await?;
    let snapshot = session.select_tile(index).await?;
    Ok(Json(render_view(&snapshot)))
}

async fn restart_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RenderedView>, ApiError> {
    let session = state.sessions.get_session(&id).await?;
    Ok(Json(render_view(&session.restart().await)))
}

async fn new_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RenderedView>, ApiError> {
    let session = state.sessions.get_session(&id).await?;
    Ok(Json(render_view(&session.start_new_game().await)))
}

async fn start_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RenderedView>, ApiError> {
    let session = state.sessions.get_session(&id).await?;
    Ok(Json(render_view(&session.begin_from_intro().await)))
}

async fn close_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.sessions.remove_session(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
