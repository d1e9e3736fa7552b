// Per-invocation generation settings.
//
// A `GenerationConfig` is built by the caller for every run and passed by
// value into the batch generator. The engine never keeps it between runs.

use serde::{Deserialize, Serialize};

use crate::sport::{ParseError, Position, Sport};

/// Upper bound on the quantity of a normal (non draft class) batch.
pub const MAX_QUANTITY: usize = 200;

/// How origins are chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "value")]
pub enum OriginMode {
    /// 80% a random college, 20% a random country.
    #[default]
    Random,
    RandomCollege,
    RandomCountry,
    College(String),
    Country(String),
}

impl OriginMode {
    /// Build a mode from its code plus the manual college/country values the
    /// fixed modes need.
    ///
    /// Accepted codes: `random`, `random_college`, `random_country`,
    /// `college`, `country` (dashes are accepted in place of underscores).
    pub fn from_parts(mode: &str, college: &str, country: &str) -> Result<Self, ParseError> {
        match mode.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "random" => Ok(OriginMode::Random),
            "random_college" => Ok(OriginMode::RandomCollege),
            "random_country" => Ok(OriginMode::RandomCountry),
            "college" => Ok(OriginMode::College(college.to_string())),
            "country" => Ok(OriginMode::Country(country.to_string())),
            other => Err(ParseError::UnknownOriginMode(other.to_string())),
        }
    }
}

/// Random or hand-entered age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeChoice {
    #[default]
    Random,
    /// Clamped into the sport's ordinary age bounds.
    Manual(i32),
}

/// Random (archetype) or hand-entered size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeChoice {
    #[default]
    Random,
    Manual {
        feet: i32,
        inches: i32,
        weight_pounds: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub sport: Sport,
    /// Freezes the sport selection on the caller's side; the engine always
    /// generates for `sport`.
    pub lock_sport: bool,
    /// Fixed position, if chosen. A position from the other sport counts as
    /// no choice.
    pub position: Option<Position>,
    pub lock_position: bool,
    /// Batch size for normal runs; clamped to `1..=MAX_QUANTITY`.
    pub quantity: usize,
    /// Generate a full draft class instead of `quantity` players.
    pub draft_class: bool,
    pub age: AgeChoice,
    pub lock_age: bool,
    /// Manual jersey number as typed. Blank means none.
    pub manual_number: Option<String>,
    /// Freezes the manual number on the caller's side; a manual number
    /// already applies to every record in the batch.
    pub lock_number: bool,
    pub origin: OriginMode,
    pub lock_origin: bool,
    pub size: SizeChoice,
    pub lock_size: bool,
    /// Seed text. Blank or absent means a fresh random seed.
    pub seed: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            sport: Sport::AmericanFootball,
            lock_sport: false,
            position: None,
            lock_position: false,
            quantity: 1,
            draft_class: false,
            age: AgeChoice::Random,
            lock_age: false,
            manual_number: None,
            lock_number: false,
            origin: OriginMode::Random,
            lock_origin: false,
            size: SizeChoice::Random,
            lock_size: false,
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// The chosen position if it belongs to the configured sport.
    pub fn chosen_position(&self) -> Option<Position> {
        self.position.filter(|p| p.sport() == self.sport)
    }

    /// The chosen position, or the sport's first position.
    pub fn position_or_default(&self) -> Position {
        self.chosen_position()
            .unwrap_or_else(|| self.sport.default_position())
    }

    /// Requested batch size clamped to `1..=MAX_QUANTITY`.
    pub fn clamped_quantity(&self) -> usize {
        self.quantity.clamp(1, MAX_QUANTITY)
    }

    /// Manual jersey number text, if one was entered.
    pub fn manual_number(&self) -> Option<&str> {
        self.manual_number
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
