// Position resolver for normal (non draft class) batches.

use crate::config::GenerationConfig;
use crate::rng::{pick, RandomStream};
use crate::sport::Position;

/// Resolve the position for one record.
///
/// Locked: the chosen position, or the sport's first position when none was
/// chosen. Unlocked: the chosen position if any, otherwise a uniform draw from
/// the sport's vocabulary. Only the uniform draw consumes randomness.
pub fn resolve_position<R: RandomStream + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Position {
    if config.lock_position {
        return config.position_or_default();
    }
    match config.chosen_position() {
        Some(pos) => pos,
        None => pick(config.sport.positions(), rng)
            .copied()
            .unwrap_or_else(|| config.sport.default_position()),
    }
}
