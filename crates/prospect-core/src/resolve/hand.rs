// Dominant hand.

use crate::player::Hand;
use crate::rng::{chance, RandomStream};

/// Share of right-handed players.
pub const RIGHT_HANDED_SHARE: f64 = 0.85;

pub fn random_hand<R: RandomStream + ?Sized>(rng: &mut R) -> Hand {
    if chance(RIGHT_HANDED_SHARE, rng) {
        Hand::Right
    } else {
        Hand::Left
    }
}
