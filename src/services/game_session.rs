// src/services/game_session.rs - one controller plus the tasks that drive its clock

use crate::config::TICK_PERIOD;
use crate::game::controller::{FlipBack, GameController, SelectionResult, TimerCommand};
use crate::game::snapshot::GameSnapshot;
use crate::{MemoryGameError, Result};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

struct SessionInner {
    controller: GameController,
    ticker: Option<JoinHandle<()>>,
    last_activity: Instant,
}

impl SessionInner {
    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for SessionInner {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

/// A game owned by one browser tab.
///
/// Every mutation goes through the inner mutex, so clicks, ticks and flip-backs
/// never interleave. After each one a fresh snapshot is published on the watch
/// channel. Timer tasks only keep a `Weak` handle: dropping the last `Arc`
/// aborts the ticker.
pub struct GameSession {
    id: String,
    inner: Mutex<SessionInner>,
    updates: watch::Sender<GameSnapshot>,
    flip_back_delay: Duration,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("flip_back_delay", &self.flip_back_delay)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    pub fn new(id: String, controller: GameController, flip_back_delay: Duration) -> Arc<Self> {
        let (updates, _) = watch::channel(controller.snapshot());
        Arc::new(Self {
            id,
            inner: Mutex::new(SessionInner {
                controller,
                ticker: None,
                last_activity: Instant::now(),
            }),
            updates,
            flip_back_delay,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        self.inner.lock().await.controller.snapshot()
    }

    /// Receiver that yields the current snapshot, then every later one.
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.updates.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.updates.receiver_count()
    }

    pub async fn idle_for(&self) -> Duration {
        self.inner.lock().await.last_activity.elapsed()
    }

    // ========================================================================
    // INTENTS
    // ========================================================================

    pub async fn select_tile(self: &Arc<Self>, index: usize) -> Result<GameSnapshot> {
        let mut inner = self.inner.lock().await;
        let len = inner.controller.board().len();
        if index >= len {
            return Err(MemoryGameError::TileOutOfRange { index, len });
        }

        let transition = inner.controller.select_tile(index);
        match transition.result {
            SelectionResult::Ignored => log::debug!("🙅 [{}] click on tile {} ignored", self.id, index),
            SelectionResult::FirstReveal { index } => {
                log::debug!("👀 [{}] tile {} revealed", self.id, index)
            }
            SelectionResult::Matched { pair, solved } => {
                log::info!("✅ [{}] pair {:?} matched", self.id, pair);
                if solved {
                    let round = inner.controller.round();
                    log::info!(
                        "🏁 [{}] board solved in {} moves, {}s",
                        self.id,
                        round.move_count,
                        round.elapsed_seconds
                    );
                }
            }
            SelectionResult::Mismatch { pair } => {
                log::debug!("❌ [{}] pair {:?} mismatched", self.id, pair)
            }
        }

        inner.last_activity = Instant::now();
        self.apply_commands(&mut inner, transition.commands);
        Ok(self.publish(&inner))
    }

    pub async fn restart(self: &Arc<Self>) -> GameSnapshot {
        let mut inner = self.inner.lock().await;
        let commands = inner.controller.restart();
        log::info!("🔄 [{}] restart", self.id);
        inner.last_activity = Instant::now();
        self.apply_commands(&mut inner, commands);
        self.publish(&inner)
    }

    pub async fn start_new_game(self: &Arc<Self>) -> GameSnapshot {
        let mut inner = self.inner.lock().await;
        let commands = inner.controller.start_new_game();
        log::info!("🆕 [{}] new game", self.id);
        inner.last_activity = Instant::now();
        self.apply_commands(&mut inner, commands);
        self.publish(&inner)
    }

    pub async fn begin_from_intro(self: &Arc<Self>) -> GameSnapshot {
        let mut inner = self.inner.lock().await;
        let commands = inner.controller.begin_from_intro();
        log::info!("▶️ [{}] game started from intro", self.id);
        inner.last_activity = Instant::now();
        self.apply_commands(&mut inner, commands);
        self.publish(&inner)
    }

    // ========================================================================
    // TIMER CALLBACKS
    // ========================================================================

    async fn tick(&self) {
        let mut inner = self.inner.lock().await;
        if inner.controller.tick() {
            self.publish(&inner);
        }
    }

    async fn resolve_mismatch(&self, flip: FlipBack) {
        let mut inner = self.inner.lock().await;
        if inner.controller.resolve_mismatch(flip) {
            self.publish(&inner);
        } else {
            log::debug!(
                "⏭️ [{}] stale flip-back for generation {} dropped",
                self.id,
                flip.generation
            );
        }
    }

    fn apply_commands(self: &Arc<Self>, inner: &mut SessionInner, commands: Vec<TimerCommand>) {
        for command in commands {
            match command {
                TimerCommand::StartTicker => {
                    inner.stop_ticker();
                    inner.ticker = Some(spawn_ticker(Arc::downgrade(self)));
                }
                TimerCommand::StopTicker => inner.stop_ticker(),
                TimerCommand::ScheduleFlipBack(flip) => {
                    spawn_flip_back(Arc::downgrade(self), flip, self.flip_back_delay);
                }
            }
        }
    }

    fn publish(&self, inner: &SessionInner) -> GameSnapshot {
        let snapshot = inner.controller.snapshot();
        self.updates.send_replace(snapshot.clone());
        snapshot
    }
}

// ============================================================================
// SCHEDULED TASKS
// ============================================================================

fn spawn_ticker(session: Weak<GameSession>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let Some(session) = session.upgrade() else {
                break;
            };
            session.tick().await;
        }
    })
}

fn spawn_flip_back(session: Weak<GameSession>, flip: FlipBack, delay: Duration) {
    tokio::spawn(async move {
        time::sleep(delay).await;
        if let Some(session) = session.upgrade() {
            session.resolve_mismatch(flip).await;
        }
    });
}
