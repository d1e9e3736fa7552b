// NFL jersey number rules: allowed sub-ranges per football position.

use std::collections::BTreeMap;

use super::Band;
use crate::sport::Position;

const TABLE: &[(Position, &[(i32, i32)])] = &[
    (Position::Quarterback, &[(0, 19)]),
    (Position::RunningBack, &[(0, 44)]),
    (Position::WideReceiver, &[(0, 19), (80, 89)]),
    (Position::TightEnd, &[(40, 49), (80, 89)]),
    (Position::OffensiveLine, &[(50, 79)]),
    (Position::DefensiveLine, &[(50, 79), (90, 99)]),
    (Position::Linebacker, &[(0, 59), (90, 99)]),
    (Position::Cornerback, &[(0, 49)]),
    (Position::Safety, &[(0, 49)]),
    (Position::Kicker, &[(0, 19)]),
    (Position::Punter, &[(0, 19)]),
];

pub(super) fn builtin() -> BTreeMap<Position, Vec<Band>> {
    TABLE
        .iter()
        .map(|&(pos, ranges)| {
            (
                pos,
                ranges.iter().map(|&(lo, hi)| Band::new(lo, hi)).collect(),
            )
        })
        .collect()
}
