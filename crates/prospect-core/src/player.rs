// Generated player records and the attribute value types they carry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sport::{Position, Sport};

/// Label used for sizes entered by hand instead of drawn from an archetype.
pub const MANUAL_ARCHETYPE: &str = "Manual";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Right,
    Left,
}

impl Hand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hand::Right => "Right",
            Hand::Left => "Left",
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginType {
    College,
    Country,
}

impl OriginType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginType::College => "college",
            OriginType::Country => "country",
        }
    }
}

/// Where a player comes from: a college or a country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Origin {
    pub kind: OriginType,
    pub value: String,
}

impl Origin {
    pub fn college(name: impl Into<String>) -> Self {
        Self {
            kind: OriginType::College,
            value: name.into(),
        }
    }

    pub fn country(name: impl Into<String>) -> Self {
        Self {
            kind: OriginType::Country,
            value: name.into(),
        }
    }
}

/// Resolved physical profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub label: String,
    pub height_inches: i32,
    pub weight_pounds: i32,
}

/// One generated player. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Opaque UUID assigned at creation.
    pub id: String,
    pub name: String,
    pub sport: Sport,
    pub position: Position,
    pub archetype_label: String,
    pub height_inches: i32,
    pub weight_pounds: i32,
    pub age: i32,
    pub dominant_hand: Hand,
    pub jersey_number: i32,
    pub origin_type: OriginType,
    pub origin_value: String,
}

impl PlayerRecord {
    /// Case-folded name used for uniqueness checks.
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    pub fn origin(&self) -> Origin {
        Origin {
            kind: self.origin_type,
            value: self.origin_value.clone(),
        }
    }

    pub fn size(&self) -> Size {
        Size {
            label: self.archetype_label.clone(),
            height_inches: self.height_inches,
            weight_pounds: self.weight_pounds,
        }
    }
}

/// Case-folded form of a player name.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Format a height in inches as feet and inches, e.g. `74` -> `6'2"`.
pub fn inches_to_ft_in(inches: i32) -> String {
    format!("{}'{}\"", inches / 12, inches % 12)
}
