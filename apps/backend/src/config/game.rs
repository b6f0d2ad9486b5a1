use std::env;

use crate::error::AppError;

/// Game tuning read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed seed for question shuffles and turn picks (`GAME_RNG_SEED`).
    /// `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl GameConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let rng_seed = match env::var("GAME_RNG_SEED") {
            Ok(raw) if raw.trim().is_empty() => None,
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                AppError::config(format!("GAME_RNG_SEED must be an unsigned integer: {e}"))
            })?),
            Err(_) => None,
        };
        Ok(Self { rng_seed })
    }
}
