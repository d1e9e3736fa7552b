// Jersey number resolver.

use crate::data::{Band, ReferenceData, JERSEY_NUMBERS};
use crate::rng::{pick, rand_int, RandomStream};
use crate::sport::{Position, Sport};

/// Interpret typed jersey text. Non-numeric text reads as 0; anything else
/// is floored and clamped to `[0, 99]`.
pub fn parse_manual_number(text: &str) -> i32 {
    let value = text.trim().parse::<f64>().unwrap_or(f64::NAN);
    if value.is_nan() {
        return 0;
    }
    let floored = value.floor();
    if floored <= f64::from(JERSEY_NUMBERS.min) {
        JERSEY_NUMBERS.min
    } else if floored >= f64::from(JERSEY_NUMBERS.max) {
        JERSEY_NUMBERS.max
    } else {
        floored as i32
    }
}

/// Resolve a jersey number.
///
/// Basketball accepts any legal manual number and draws uniformly from
/// `[0, 99]` otherwise. Football draws from the position's sub-ranges, and a
/// manual number outside them is replaced by a draw.
pub fn resolve_number<R: RandomStream + ?Sized>(
    manual: Option<&str>,
    sport: Sport,
    position: Position,
    data: &ReferenceData,
    rng: &mut R,
) -> i32 {
    let manual = manual
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_manual_number);

    match sport {
        Sport::Basketball => {
            manual.unwrap_or_else(|| rand_int(JERSEY_NUMBERS.min, JERSEY_NUMBERS.max, rng))
        }
        Sport::AmericanFootball => {
            let ranges = data.jersey_ranges_for(position);
            match manual {
                Some(n) if ranges.iter().any(|r| r.contains(n)) => n,
                _ => draw_from_ranges(ranges, rng),
            }
        }
    }
}

/// Uniform sub-range, then a uniform value within it.
fn draw_from_ranges<R: RandomStream + ?Sized>(ranges: &[Band], rng: &mut R) -> i32 {
    let band = pick(ranges, rng).copied().unwrap_or(JERSEY_NUMBERS);
    rand_int(band.min, band.max, rng)
}
