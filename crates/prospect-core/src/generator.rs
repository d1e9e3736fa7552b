// Batch generator: turns a GenerationConfig into a batch of unique players.
//
// One batch = one seeded stream. Attributes are drawn in a fixed order per
// record (position, origin, name, size, jersey, age, hand) so that a seed
// replays the same batch. Locked attributes are resolved once up front.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::GenerationConfig;
use crate::data::ReferenceData;
use crate::draft_class;
use crate::player::{name_key, Origin, PlayerRecord, Size};
use crate::resolve::{
    make_name, random_hand, resolve_age, resolve_number, resolve_origin, resolve_position,
    resolve_size, rookie_age,
};
use crate::rng::{Mulberry32, RandomStream};
use crate::sport::Position;

/// Attempts allowed per requested player before a batch is cut short.
pub const ATTEMPTS_PER_PLAYER: usize = 500;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Position frequency summary of one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionBreakdown {
    pub total: usize,
    pub counts: BTreeMap<Position, usize>,
}

impl PositionBreakdown {
    pub fn from_players(players: &[PlayerRecord]) -> Self {
        let mut counts = BTreeMap::new();
        for p in players {
            *counts.entry(p.position).or_insert(0) += 1;
        }
        Self {
            total: players.len(),
            counts,
        }
    }

    /// Counts ordered by frequency, most common first. Ties keep vocabulary
    /// order.
    pub fn sorted_desc(&self) -> Vec<(Position, usize)> {
        let mut out: Vec<(Position, usize)> = self.counts.iter().map(|(&p, &n)| (p, n)).collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        out
    }

    /// One-line report, e.g. `Last batch: 5 • QB 3 • WR 2`.
    pub fn summary_line(&self) -> String {
        let mut line = format!("Last batch: {}", self.total);
        for (pos, n) in self.sorted_desc() {
            line.push_str(&format!(" • {pos} {n}"));
        }
        line
    }
}

#[derive(Debug, Clone)]
pub struct Batch {
    /// Seed the stream was started from; rerunning with it repeats the batch.
    pub seed: u32,
    /// Number of players the batch aimed for.
    pub requested: usize,
    /// Candidate records drawn, including discarded duplicates.
    pub attempts: usize,
    pub players: Vec<PlayerRecord>,
    pub breakdown: PositionBreakdown,
}

impl Batch {
    /// True when the attempt cap stopped the batch before its target.
    pub fn is_short(&self) -> bool {
        self.players.len() < self.requested
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

pub struct BatchGenerator<'a> {
    data: &'a ReferenceData,
}

impl<'a> BatchGenerator<'a> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self { data }
    }

    /// Generate a batch using the config's seed text (or a fresh seed) and the
    /// thread RNG for draft class allocation.
    pub fn generate(&self, config: &GenerationConfig, existing: &[PlayerRecord]) -> Batch {
        let (mut stream, seed) = Mulberry32::from_seed_text(config.seed.as_deref());
        let mut draft_rng = rand::thread_rng();
        self.generate_with(config, existing, seed, &mut stream, &mut draft_rng)
    }

    /// Generate a batch from an explicit attribute stream and allocator RNG.
    /// `seed` is only reported back on the batch.
    pub fn generate_with<R, G>(
        &self,
        config: &GenerationConfig,
        existing: &[PlayerRecord],
        seed: u32,
        stream: &mut R,
        draft_rng: &mut G,
    ) -> Batch
    where
        R: RandomStream + ?Sized,
        G: Rng,
    {
        let data = self.data;
        let sport = config.sport;

        let allocation = if config.draft_class {
            draft_class::allocate(sport, &data.draft, draft_rng)
        } else {
            Vec::new()
        };
        let requested = if config.draft_class {
            allocation.len()
        } else {
            config.clamped_quantity()
        };
        let max_attempts = requested.saturating_mul(ATTEMPTS_PER_PLAYER);

        // Batch-wide locks, in draw order.
        let locked_origin: Option<Origin> = config
            .lock_origin
            .then(|| resolve_origin(&config.origin, data, stream));
        let locked_age: Option<i32> = (config.lock_age && !config.draft_class)
            .then(|| resolve_age(config.age, sport, data, stream));
        let locked_size: Option<Size> = (config.lock_size && !config.draft_class).then(|| {
            resolve_size(&config.size, sport, config.position_or_default(), data, stream)
        });

        let mut taken: HashSet<String> = existing.iter().map(PlayerRecord::name_key).collect();
        let mut players: Vec<PlayerRecord> = Vec::with_capacity(requested);
        let mut attempts = 0;

        while players.len() < requested && attempts < max_attempts {
            attempts += 1;

            let position = if config.draft_class {
                allocation[players.len()]
            } else {
                resolve_position(config, stream)
            };
            let origin = match &locked_origin {
                Some(origin) => origin.clone(),
                None => resolve_origin(&config.origin, data, stream),
            };
            let name = make_name(&origin, data, stream);
            let key = name_key(&name);
            if taken.contains(&key) {
                debug!(%name, "Duplicate name; retrying");
                continue;
            }

            let size = match &locked_size {
                Some(size) => size.clone(),
                None => resolve_size(&config.size, sport, position, data, stream),
            };
            let jersey_number = resolve_number(config.manual_number(), sport, position, data, stream);
            let age = if config.draft_class {
                rookie_age(sport, data, stream)
            } else {
                match locked_age {
                    Some(age) => age,
                    None => resolve_age(config.age, sport, data, stream),
                }
            };
            let dominant_hand = random_hand(stream);

            taken.insert(key);
            players.push(PlayerRecord {
                id: Uuid::new_v4().to_string(),
                name,
                sport,
                position,
                archetype_label: size.label,
                height_inches: size.height_inches,
                weight_pounds: size.weight_pounds,
                age,
                dominant_hand,
                jersey_number,
                origin_type: origin.kind,
                origin_value: origin.value,
            });
        }

        if players.len() < requested {
            warn!(
                requested,
                produced = players.len(),
                attempts,
                "Name space exhausted; batch is short"
            );
        }
        info!(
            sport = %sport,
            requested,
            produced = players.len(),
            attempts,
            draft_class = config.draft_class,
            seed,
            "Generated batch"
        );

        let breakdown = PositionBreakdown::from_players(&players);
        Batch {
            seed,
            requested,
            attempts,
            players,
            breakdown,
        }
    }
}
