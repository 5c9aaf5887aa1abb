use crate::game::symbol::{alphabet, Symbol};
use crate::{MemoryGameError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// How long a mismatched pair stays face up.
pub const FLIP_BACK_DELAY: Duration = Duration::from_millis(1000);

/// Period of the elapsed-time clock.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Number of symbol pairs on the board (1..=18).
    pub pairs: usize,
    pub flip_back_delay: Duration,
    /// Fixed shuffle seed; session `n` shuffles with `seed + n`.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pairs: Symbol::ALL.len(),
            flip_back_delay: FLIP_BACK_DELAY,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(self) -> Result<Self> {
        if self.pairs == 0 || self.pairs > Symbol::ALL.len() {
            return Err(MemoryGameError::InvalidConfig(format!(
                "pairs must be between 1 and {}, got {}",
                Symbol::ALL.len(),
                self.pairs
            )));
        }
        if self.flip_back_delay.is_zero() {
            return Err(MemoryGameError::InvalidConfig(
                "flip-back delay must be positive".to_string(),
            ));
        }
        Ok(self)
    }

    pub fn alphabet(&self) -> &'static [Symbol] {
        alphabet(self.pairs)
    }

    pub fn rng_for_session(&self, ordinal: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(ordinal)),
            None => StdRng::from_os_rng(),
        }
    }
}
