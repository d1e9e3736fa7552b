// Sports and their fixed position vocabularies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to parse a user-facing code (sport, position, origin mode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown sport `{0}` (expected football or basketball)")]
    UnknownSport(String),

    #[error("unknown position `{0}`")]
    UnknownPosition(String),

    #[error("unknown origin mode `{0}`")]
    UnknownOriginMode(String),
}

// ---------------------------------------------------------------------------
// Sport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    #[serde(alias = "football", alias = "madden", alias = "nfl")]
    AmericanFootball,
    #[serde(alias = "nba2k", alias = "nba")]
    Basketball,
}

impl Sport {
    pub const ALL: [Sport; 2] = [Sport::AmericanFootball, Sport::Basketball];

    /// The sport's position vocabulary, in display order.
    pub fn positions(&self) -> &'static [Position] {
        match self {
            Sport::AmericanFootball => FOOTBALL_POSITIONS,
            Sport::Basketball => BASKETBALL_POSITIONS,
        }
    }

    /// The first position of the vocabulary; the fallback whenever a position
    /// is needed but none was chosen.
    pub fn default_position(&self) -> Position {
        match self {
            Sport::AmericanFootball => Position::Quarterback,
            Sport::Basketball => Position::PointGuard,
        }
    }

    /// Short league-style label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Sport::AmericanFootball => "NFL",
            Sport::Basketball => "NBA",
        }
    }

    /// Stable lowercase code used in config files and storage.
    pub fn code(&self) -> &'static str {
        match self {
            Sport::AmericanFootball => "american_football",
            Sport::Basketball => "basketball",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sport {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "american_football" | "football" | "nfl" | "madden" => Ok(Sport::AmericanFootball),
            "basketball" | "nba" | "nba2k" => Ok(Sport::Basketball),
            other => Err(ParseError::UnknownSport(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Every position code either sport can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    // Football
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
    #[serde(rename = "OL")]
    OffensiveLine,
    #[serde(rename = "DL")]
    DefensiveLine,
    #[serde(rename = "LB")]
    Linebacker,
    #[serde(rename = "CB")]
    Cornerback,
    #[serde(rename = "S")]
    Safety,
    #[serde(rename = "K")]
    Kicker,
    #[serde(rename = "P")]
    Punter,
    // Basketball
    #[serde(rename = "PG")]
    PointGuard,
    #[serde(rename = "SG")]
    ShootingGuard,
    #[serde(rename = "G/F")]
    GuardForward,
    #[serde(rename = "SF")]
    SmallForward,
    #[serde(rename = "PF")]
    PowerForward,
    #[serde(rename = "F/C")]
    ForwardCenter,
    #[serde(rename = "C")]
    Center,
}

const FOOTBALL_POSITIONS: &[Position] = &[
    Position::Quarterback,
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
    Position::OffensiveLine,
    Position::DefensiveLine,
    Position::Linebacker,
    Position::Cornerback,
    Position::Safety,
    Position::Kicker,
    Position::Punter,
];

const BASKETBALL_POSITIONS: &[Position] = &[
    Position::PointGuard,
    Position::ShootingGuard,
    Position::GuardForward,
    Position::SmallForward,
    Position::PowerForward,
    Position::ForwardCenter,
    Position::Center,
];

impl Position {
    /// Parse a position code ("QB", "g/f", ...). Case-insensitive.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            "OL" => Some(Position::OffensiveLine),
            "DL" => Some(Position::DefensiveLine),
            "LB" => Some(Position::Linebacker),
            "CB" => Some(Position::Cornerback),
            "S" => Some(Position::Safety),
            "K" => Some(Position::Kicker),
            "P" => Some(Position::Punter),
            "PG" => Some(Position::PointGuard),
            "SG" => Some(Position::ShootingGuard),
            "G/F" => Some(Position::GuardForward),
            "SF" => Some(Position::SmallForward),
            "PF" => Some(Position::PowerForward),
            "F/C" => Some(Position::ForwardCenter),
            "C" => Some(Position::Center),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::OffensiveLine => "OL",
            Position::DefensiveLine => "DL",
            Position::Linebacker => "LB",
            Position::Cornerback => "CB",
            Position::Safety => "S",
            Position::Kicker => "K",
            Position::Punter => "P",
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::GuardForward => "G/F",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::ForwardCenter => "F/C",
            Position::Center => "C",
        }
    }

    /// The sport this position belongs to.
    pub fn sport(&self) -> Sport {
        match self {
            Position::PointGuard
            | Position::ShootingGuard
            | Position::GuardForward
            | Position::SmallForward
            | Position::PowerForward
            | Position::ForwardCenter
            | Position::Center => Sport::Basketball,
            _ => Sport::AmericanFootball,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_code(s).ok_or_else(|| ParseError::UnknownPosition(s.to_string()))
    }
}
