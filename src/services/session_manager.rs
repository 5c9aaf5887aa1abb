// src/services/session_manager.rs - one game session per browser tab

use crate::config::GameConfig;
use crate::game::controller::GameController;
use crate::services::game_session::GameSession;
use crate::{MemoryGameError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

pub type SessionStore = HashMap<String, Arc<GameSession>>;

#[derive(Clone)]
pub struct SessionManager {
    store: Arc<RwLock<SessionStore>>,
    config: Arc<GameConfig>,
    created: Arc<AtomicU64>,
}

impl SessionManager {
    pub fn new(config: GameConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            config: Arc::new(config),
            created: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub async fn create_session(&self) -> Arc<GameSession> {
        let ordinal = self.created.fetch_add(1, Ordering::Relaxed);
        let controller =
            GameController::new(self.config.alphabet(), self.config.rng_for_session(ordinal));
        let session = GameSession::new(
            Uuid::new_v4().to_string(),
            controller,
            self.config.flip_back_delay,
        );

        let count = {
            let mut store = self.store.write().await;
            store.insert(session.id().to_string(), Arc::clone(&session));
            store.len()
        };
        log::info!("🎮 Session {} created ({} active)", session.id(), count);

        session
    }

    pub async fn get_session(&self, session_id: &str) -> Result<Arc<GameSession>> {
        self.store
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or_else(|| MemoryGameError::SessionNotFound(session_id.to_string()))
    }

    /// Drops the session from the store; its ticker stops once the last handle is gone.
    pub async fn remove_session(&self, session_id: &str) -> Result<()> {
        let removed = self.store.write().await.remove(session_id);
        match removed {
            Some(_) => {
                log::info!("🗑️ Session {} closed", session_id);
                Ok(())
            }
            None => Err(MemoryGameError::SessionNotFound(session_id.to_string())),
        }
    }

    pub async fn session_count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Removes sessions nobody watches that saw no intent for `max_idle`.
    pub async fn reap_idle(&self, max_idle: Duration) -> usize {
        let sessions: Vec<Arc<GameSession>> = self.store.read().await.values().cloned().collect();

        let mut candidates = Vec::new();
        for session in sessions {
            if is_expired(&session, max_idle).await {
                candidates.push(session.id().to_string());
            }
        }

        if candidates.is_empty() {
            return 0;
        }
        self.remove_expired(&candidates, max_idle).await
    }

    /// Second look under the write lock: a candidate that got a subscriber or an
    /// intent since the first pass is kept.
    async fn remove_expired(&self, candidates: &[String], max_idle: Duration) -> usize {
        let mut store = self.store.write().await;
        let mut reaped = 0;
        for session_id in candidates {
            let expired = match store.get(session_id) {
                Some(session) => is_expired(session, max_idle).await,
                None => false,
            };
            if expired {
                store.remove(session_id);
                reaped += 1;
            }
        }

        if reaped > 0 {
            log::info!("🧹 Reaped {} idle session(s), {} left", reaped, store.len());
        }
        reaped
    }
}

async fn is_expired(session: &GameSession, max_idle: Duration) -> bool {
    session.subscriber_count() == 0 && session.idle_for().await >= max_idle
}
