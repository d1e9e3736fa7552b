// Reference data tables: archetype bands, jersey ranges, age bounds, origins,
// name pools and draft class distributions.
//
// The engine treats all of this as injected lookup data. `ReferenceData::builtin()`
// supplies the shipped tables; callers may substitute their own (the CLI can
// load a JSON file with the same shape).

mod archetypes;
mod draft;
mod jersey;
mod names;
mod origins;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sport::{Position, Sport};

pub use draft::{DraftDistributions, PositionCount, PositionRange, FOOTBALL_DRAFT_CLASS_SIZE};

/// Pool id used for college origins and North American countries.
pub const NORTH_AMERICA_POOL: &str = "north_america";

// ---------------------------------------------------------------------------
// Value types
// ---------------------------------------------------------------------------

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub min: i32,
    pub max: i32,
}

impl Band {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.max(self.min).min(self.max)
    }

    /// The band extended by `slack` on both sides.
    pub fn widened(&self, slack: i32) -> Self {
        Self::new(self.min - slack, self.max + slack)
    }
}

/// A named physical profile for a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub label: String,
    /// Height band in inches.
    pub height: Band,
    /// Weight band in pounds.
    pub weight: Band,
}

/// Ordinary and rookie (draft class) age bounds for one sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportAges {
    pub ordinary: Band,
    pub rookie: Band,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBounds {
    pub american_football: SportAges,
    pub basketball: SportAges,
}

impl AgeBounds {
    pub fn for_sport(&self, sport: Sport) -> SportAges {
        match sport {
            Sport::AmericanFootball => self.american_football,
            Sport::Basketball => self.basketball,
        }
    }
}

/// First and last names drawn independently to build a full name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamePool {
    pub first: Vec<String>,
    pub last: Vec<String>,
}

impl NamePool {
    pub fn new(first: &[&str], last: &[&str]) -> Self {
        Self {
            first: strings(first),
            last: strings(last),
        }
    }

    /// A pool can only produce names when both lists are populated.
    pub fn is_usable(&self) -> bool {
        !self.first.is_empty() && !self.last.is_empty()
    }

    /// Number of distinct first/last combinations.
    pub fn combinations(&self) -> usize {
        self.first.len() * self.last.len()
    }
}

// ---------------------------------------------------------------------------
// ReferenceData
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Archetype lists keyed by position (both sports share the map; position
    /// codes are unique across sports).
    pub archetypes: BTreeMap<Position, Vec<Archetype>>,
    /// Allowed jersey sub-ranges for football positions. Basketball allows
    /// the full 0-99 range and needs no entries.
    pub jersey_ranges: BTreeMap<Position, Vec<Band>>,
    pub ages: AgeBounds,
    pub colleges: Vec<String>,
    pub countries: Vec<String>,
    /// Country name -> name pool id.
    pub country_pools: BTreeMap<String, String>,
    /// Name pools keyed by pool id.
    pub name_pools: BTreeMap<String, NamePool>,
    /// Pool for colleges and any country the map sends to the North America id.
    pub north_america: NamePool,
    /// Fallback pool for countries with no usable mapped pool.
    pub international: NamePool,
    pub draft: DraftDistributions,
}

impl ReferenceData {
    /// The tables shipped with the generator.
    pub fn builtin() -> Self {
        let (north_america, name_pools, international) = names::builtin_pools();
        Self {
            archetypes: archetypes::builtin(),
            jersey_ranges: jersey::builtin(),
            ages: AgeBounds {
                american_football: SportAges {
                    ordinary: Band::new(20, 40),
                    rookie: Band::new(21, 24),
                },
                basketball: SportAges {
                    ordinary: Band::new(18, 38),
                    rookie: Band::new(18, 23),
                },
            },
            colleges: strings(origins::COLLEGES),
            countries: strings(origins::COUNTRIES),
            country_pools: origins::COUNTRY_POOLS
                .iter()
                .map(|(country, pool)| (country.to_string(), pool.to_string()))
                .collect(),
            name_pools,
            north_america,
            international,
            draft: DraftDistributions::builtin(),
        }
    }

    /// Archetypes for a position, falling back to the sport's first position
    /// and then to whatever list the table holds for that sport.
    pub fn archetypes_for(&self, sport: Sport, position: Position) -> &[Archetype] {
        if let Some(list) = self.archetypes.get(&position).filter(|l| !l.is_empty()) {
            return list;
        }
        if let Some(list) = self
            .archetypes
            .get(&sport.default_position())
            .filter(|l| !l.is_empty())
        {
            return list;
        }
        self.archetypes
            .iter()
            .find(|(pos, list)| pos.sport() == sport && !list.is_empty())
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    /// Allowed jersey sub-ranges for a football position; `[0, 99]` when the
    /// table has no entry.
    pub fn jersey_ranges_for(&self, position: Position) -> &[Band] {
        match self.jersey_ranges.get(&position) {
            Some(ranges) if !ranges.is_empty() => ranges.as_slice(),
            _ => &FULL_JERSEY_RANGE[..],
        }
    }

    /// The name pool for a country: its mapped pool if usable, otherwise the
    /// generic international pool.
    pub fn pool_for_country(&self, country: &str) -> &NamePool {
        let mapped = self.country_pools.get(country).and_then(|id| {
            if id == NORTH_AMERICA_POOL {
                Some(&self.north_america)
            } else {
                self.name_pools.get(id)
            }
        });
        match mapped {
            Some(pool) if pool.is_usable() => pool,
            _ => &self.international,
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Every legal jersey number.
pub const JERSEY_NUMBERS: Band = Band::new(0, 99);

static FULL_JERSEY_RANGE: [Band; 1] = [JERSEY_NUMBERS];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_position() {
        let data = ReferenceData::builtin();
        for sport in Sport::ALL {
            for pos in sport.positions() {
                let list = data.archetypes.get(pos).expect("archetypes for every position");
                assert!(!list.is_empty(), "{pos} has no archetypes");
                for a in list {
                    assert!(a.height.min <= a.height.max, "{}", a.label);
                    assert!(a.weight.min <= a.weight.max, "{}", a.label);
                }
            }
        }
        for pos in Sport::AmericanFootball.positions() {
            assert!(data.jersey_ranges.contains_key(pos), "{pos} has no jersey ranges");
        }
    }

    #[test]
    fn jersey_ranges_stay_inside_legal_numbers() {
        let data = ReferenceData::builtin();
        for ranges in data.jersey_ranges.values() {
            for r in ranges {
                assert!(JERSEY_NUMBERS.contains(r.min) && JERSEY_NUMBERS.contains(r.max));
                assert!(r.min <= r.max);
            }
        }
    }

    #[test]
    fn unknown_jersey_position_falls_back_to_full_range() {
        let mut data = ReferenceData::builtin();
        data.jersey_ranges.remove(&Position::Kicker);
        assert_eq!(data.jersey_ranges_for(Position::Kicker), &[Band::new(0, 99)]);
    }

    #[test]
    fn missing_archetypes_fall_back_to_first_position() {
        let mut data = ReferenceData::builtin();
        data.archetypes.remove(&Position::Punter);
        let qb = data.archetypes[&Position::Quarterback].clone();
        assert_eq!(
            data.archetypes_for(Sport::AmericanFootball, Position::Punter),
            qb.as_slice()
        );
    }

    #[test]
    fn mapped_country_uses_its_pool() {
        let data = ReferenceData::builtin();
        let japan = data.pool_for_country("Japan");
        assert!(japan.first.iter().any(|n| n == "Haruto"));
        assert_eq!(japan, &data.name_pools["japanese"]);
    }

    #[test]
    fn north_american_countries_use_north_america_pool() {
        let data = ReferenceData::builtin();
        assert_eq!(data.pool_for_country("Canada"), &data.north_america);
    }

    #[test]
    fn unmapped_country_uses_international_pool() {
        let data = ReferenceData::builtin();
        assert_eq!(data.pool_for_country("Atlantis"), &data.international);
        assert!(!data.country_pools.contains_key("Serbia"));
        assert_eq!(data.pool_for_country("Serbia"), &data.international);
    }

    #[test]
    fn empty_mapped_pool_uses_international_pool() {
        let mut data = ReferenceData::builtin();
        data.name_pools.insert("japanese".into(), NamePool::default());
        assert_eq!(data.pool_for_country("Japan"), &data.international);
    }

    #[test]
    fn every_mapped_pool_exists() {
        let data = ReferenceData::builtin();
        for (country, id) in &data.country_pools {
            assert!(
                id == NORTH_AMERICA_POOL || data.name_pools.contains_key(id),
                "{country} maps to missing pool {id}"
            );
        }
    }

    #[test]
    fn reference_data_json_shape_loads() {
        let data = ReferenceData::builtin();
        let json = serde_json::to_string(&data).unwrap();
        let back: ReferenceData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.archetypes, data.archetypes);
        assert_eq!(back.country_pools, data.country_pools);
    }

    #[test]
    fn band_helpers() {
        let b = Band::new(70, 73);
        assert!(b.contains(70) && b.contains(73) && !b.contains(74));
        assert_eq!(b.clamp(90), 73);
        assert_eq!(b.widened(1), Band::new(69, 74));
    }
}
