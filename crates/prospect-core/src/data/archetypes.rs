// Built-in archetype bands per position.

use std::collections::BTreeMap;

use super::{Archetype, Band};
use crate::sport::Position;

// (label, height min, height max, weight min, weight max)
type Row = (&'static str, i32, i32, i32, i32);

const TABLE: &[(Position, &[Row])] = &[
    (
        Position::Quarterback,
        &[("Pocket Passer", 74, 79, 220, 245), ("Dual-Threat", 72, 77, 205, 230)],
    ),
    (
        Position::RunningBack,
        &[("Speed Back", 67, 70, 190, 210), ("Power Back", 70, 73, 220, 240)],
    ),
    (
        Position::WideReceiver,
        &[
            ("Slot WR", 69, 72, 175, 195),
            ("Outside WR", 72, 76, 190, 215),
            ("Big WR", 74, 77, 210, 230),
        ],
    ),
    (
        Position::TightEnd,
        &[("Move TE", 75, 78, 235, 255), ("Inline TE", 76, 79, 250, 270)],
    ),
    (
        Position::OffensiveLine,
        &[("Tackle", 76, 80, 305, 340), ("Guard/Center", 75, 78, 300, 330)],
    ),
    (
        Position::DefensiveLine,
        &[("EDGE", 75, 78, 245, 270), ("Interior DL", 74, 78, 295, 330)],
    ),
    (
        Position::Linebacker,
        &[("Off-Ball LB", 72, 76, 225, 245), ("Edge LB", 74, 77, 245, 265)],
    ),
    (
        Position::Cornerback,
        &[("Boundary CB", 70, 73, 185, 200), ("Nickel CB", 69, 72, 175, 190)],
    ),
    (
        Position::Safety,
        &[("Free Safety", 71, 74, 190, 205), ("Strong Safety", 72, 75, 205, 220)],
    ),
    (Position::Kicker, &[("Kicker", 69, 74, 170, 200)]),
    (Position::Punter, &[("Punter", 70, 75, 175, 205)]),
    (Position::PointGuard, &[("Lead Guard", 72, 75, 170, 195)]),
    (Position::ShootingGuard, &[("Scoring Guard", 75, 78, 185, 210)]),
    (Position::GuardForward, &[("Combo Wing", 76, 79, 195, 220)]),
    (Position::SmallForward, &[("Two-Way Wing", 77, 80, 205, 230)]),
    (Position::PowerForward, &[("Stretch/Slasher PF", 79, 82, 220, 250)]),
    (Position::ForwardCenter, &[("Small-Ball 5", 80, 83, 230, 255)]),
    (Position::Center, &[("Traditional 5", 82, 86, 240, 275)]),
];

pub(super) fn builtin() -> BTreeMap<Position, Vec<Archetype>> {
    TABLE
        .iter()
        .map(|&(pos, rows)| {
            let list = rows
                .iter()
                .map(|&(label, h_min, h_max, w_min, w_max)| Archetype {
                    label: label.to_string(),
                    height: Band::new(h_min, h_max),
                    weight: Band::new(w_min, w_max),
                })
                .collect();
            (pos, list)
        })
        .collect()
}
