// Draft class position distributions.

use serde::{Deserialize, Serialize};

use crate::sport::Position;

/// Size of a football draft class (seven rounds of 32 picks).
pub const FOOTBALL_DRAFT_CLASS_SIZE: u32 = 224;

/// A fixed head count for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCount {
    pub position: Position,
    pub count: u32,
}

/// An inclusive head-count range for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRange {
    pub position: Position,
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftDistributions {
    /// Fixed basketball mix; the class size is the sum of the counts.
    pub basketball: Vec<PositionCount>,
    /// Football ranges, listed in balancing priority order.
    pub football: Vec<PositionRange>,
    pub football_target: u32,
}

impl DraftDistributions {
    pub fn builtin() -> Self {
        let basketball = [
            (Position::PointGuard, 10),
            (Position::ShootingGuard, 10),
            (Position::SmallForward, 10),
            (Position::PowerForward, 10),
            (Position::Center, 10),
            (Position::GuardForward, 5),
            (Position::ForwardCenter, 5),
        ]
        .into_iter()
        .map(|(position, count)| PositionCount { position, count })
        .collect();

        let football = [
            (Position::OffensiveLine, 39, 53),
            (Position::DefensiveLine, 39, 54),
            (Position::WideReceiver, 27, 41),
            (Position::Cornerback, 27, 44),
            (Position::Linebacker, 25, 43),
            (Position::Safety, 22, 41),
            (Position::RunningBack, 9, 17),
            (Position::TightEnd, 7, 14),
            (Position::Quarterback, 9, 16),
            (Position::Kicker, 2, 5),
            (Position::Punter, 2, 4),
        ]
        .into_iter()
        .map(|(position, min, max)| PositionRange { position, min, max })
        .collect();

        Self {
            basketball,
            football,
            football_target: FOOTBALL_DRAFT_CLASS_SIZE,
        }
    }
}
