// Draft class position allocator.
//
// Produces the shuffled list of positions a draft class is generated from.
// It draws from its own `rand::Rng`, never from the batch stream, so a seeded
// draft class run repeats its attributes but not its position order.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::data::{DraftDistributions, PositionCount, PositionRange};
use crate::sport::{Position, Sport};

/// Safety ceiling on correction steps when steering the football total onto
/// its target.
pub const MAX_BALANCE_STEPS: usize = 10_000;

/// Shuffled position list for a draft class of `sport`.
pub fn allocate<G: Rng>(
    sport: Sport,
    distributions: &DraftDistributions,
    rng: &mut G,
) -> Vec<Position> {
    match sport {
        Sport::Basketball => basketball_positions(&distributions.basketball, rng),
        Sport::AmericanFootball => {
            football_positions(&distributions.football, distributions.football_target, rng)
        }
    }
}

/// Fixed counts, flattened and shuffled.
pub fn basketball_positions<G: Rng>(mix: &[PositionCount], rng: &mut G) -> Vec<Position> {
    let mut out = flatten(mix.iter().map(|c| (c.position, c.count)));
    out.shuffle(rng);
    out
}

/// Sample a count per position, prefer RB >= TE, steer the total onto
/// `target`, then flatten and shuffle.
pub fn football_positions<G: Rng>(
    ranges: &[PositionRange],
    target: u32,
    rng: &mut G,
) -> Vec<Position> {
    let mut counts: Vec<u32> = ranges
        .iter()
        .map(|r| {
            let (lo, hi) = if r.min <= r.max { (r.min, r.max) } else { (r.max, r.min) };
            rng.gen_range(lo..=hi)
        })
        .collect();
    debug!(sampled = counts.iter().sum::<u32>(), target, "Sampled draft class counts");

    prefer_backs_over_ends(ranges, &mut counts);
    let total = balance_counts(ranges, &mut counts, target);
    if total != target {
        warn!(total, target, "Draft class ranges cannot reach target; using best effort");
    }

    let mut out = flatten(ranges.iter().zip(&counts).map(|(r, &c)| (r.position, c)));
    out.shuffle(rng);
    out
}

/// Move surplus tight ends to running back while RB < TE, within both ranges.
fn prefer_backs_over_ends(ranges: &[PositionRange], counts: &mut [u32]) {
    let (Some(rb), Some(te)) = (
        index_of(ranges, Position::RunningBack),
        index_of(ranges, Position::TightEnd),
    ) else {
        return;
    };
    if counts[rb] >= counts[te] {
        return;
    }
    let gap = counts[te] - counts[rb];
    let rb_headroom = ranges[rb].max.saturating_sub(counts[rb]);
    let te_room = counts[te].saturating_sub(ranges[te].min);
    let shift = gap.min(rb_headroom).min(te_room);
    counts[rb] += shift;
    counts[te] -= shift;
}

/// Step the total toward `target` one head at a time, walking positions in
/// priority order. Decrements never take RB below TE and increments never
/// take TE above RB. Returns the final total, which differs from `target`
/// only when no legal step remains or the step ceiling is hit.
pub fn balance_counts(ranges: &[PositionRange], counts: &mut [u32], target: u32) -> u32 {
    let rb = index_of(ranges, Position::RunningBack);
    let te = index_of(ranges, Position::TightEnd);
    let mut total: u32 = counts.iter().sum();

    for _ in 0..MAX_BALANCE_STEPS {
        if total == target {
            break;
        }
        let step = if total > target {
            (0..counts.len()).find(|&i| {
                if counts[i] <= ranges[i].min {
                    return false;
                }
                match (Some(i) == rb, te) {
                    (true, Some(te)) => counts[i] > counts[te],
                    _ => true,
                }
            })
        } else {
            (0..counts.len()).find(|&i| {
                if counts[i] >= ranges[i].max {
                    return false;
                }
                match (Some(i) == te, rb) {
                    (true, Some(rb)) => counts[i] < counts[rb],
                    _ => true,
                }
            })
        };
        let Some(i) = step else {
            break;
        };
        if total > target {
            counts[i] -= 1;
            total -= 1;
        } else {
            counts[i] += 1;
            total += 1;
        }
    }
    total
}

fn index_of(ranges: &[PositionRange], position: Position) -> Option<usize> {
    ranges.iter().position(|r| r.position == position)
}

fn flatten(counts: impl Iterator<Item = (Position, u32)>) -> Vec<Position> {
    counts
        .flat_map(|(pos, n)| std::iter::repeat(pos).take(n as usize))
        .collect()
}
