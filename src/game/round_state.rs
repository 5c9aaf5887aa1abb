use serde::{Deserialize, Serialize};

/// Where the round state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Timer stopped and nothing played yet.
    Idle,
    AwaitingFirst,
    AwaitingSecond,
    Solved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// At most two indices, in click order.
    pub pending_selection: Vec<usize>,
    pub move_count: u32,
    pub elapsed_seconds: u64,
    pub is_timer_running: bool,
    pub is_intro_visible: bool,
    /// Bumped on every reset; flip-backs from older generations are dropped.
    pub generation: u64,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            pending_selection: Vec::with_capacity(2),
            move_count: 0,
            elapsed_seconds: 0,
            is_timer_running: false,
            is_intro_visible: true,
            generation: 0,
        }
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.pending_selection.contains(&index)
    }

    /// Clears selection, stats and timer for a fresh board. Intro visibility is kept.
    pub fn reset(&mut self) {
        self.pending_selection.clear();
        self.move_count = 0;
        self.elapsed_seconds = 0;
        self.is_timer_running = false;
        self.generation += 1;
    }
}
