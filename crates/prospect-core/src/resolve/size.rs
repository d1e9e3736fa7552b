// Size resolver: archetype-driven or manual height and weight.

use crate::config::SizeChoice;
use crate::data::{Archetype, Band, ReferenceData};
use crate::player::{Size, MANUAL_ARCHETYPE};
use crate::rng::{pick, rand_int, RandomStream};
use crate::sport::{Position, Sport};

/// Hard bounds for hand-entered height (inches).
pub const MANUAL_HEIGHT: Band = Band::new(58, 90);
/// Hard bounds for hand-entered weight (pounds).
pub const MANUAL_WEIGHT: Band = Band::new(140, 380);

/// Drawn heights may land this many inches outside the archetype band.
pub const HEIGHT_SLACK: i32 = 1;
/// Drawn weights may land this many pounds outside the archetype band.
pub const WEIGHT_SLACK: i32 = 10;

pub fn resolve_size<R: RandomStream + ?Sized>(
    choice: &SizeChoice,
    sport: Sport,
    position: Position,
    data: &ReferenceData,
    rng: &mut R,
) -> Size {
    match *choice {
        SizeChoice::Manual {
            feet,
            inches,
            weight_pounds,
        } => manual_size(feet, inches, weight_pounds),
        SizeChoice::Random => archetype_size(data.archetypes_for(sport, position), rng),
    }
}

pub fn manual_size(feet: i32, inches: i32, weight_pounds: i32) -> Size {
    let total = feet.saturating_mul(12).saturating_add(inches);
    Size {
        label: MANUAL_ARCHETYPE.to_string(),
        height_inches: MANUAL_HEIGHT.clamp(total),
        weight_pounds: MANUAL_WEIGHT.clamp(weight_pounds),
    }
}

/// Pick an archetype uniformly, then height and weight uniformly within its
/// bands, each clamped to the band plus slack.
fn archetype_size<R: RandomStream + ?Sized>(archetypes: &[Archetype], rng: &mut R) -> Size {
    let Some(arch) = pick(archetypes, rng) else {
        // Only reachable with an injected table that has no archetypes at all
        // for the sport.
        return Size {
            label: MANUAL_ARCHETYPE.to_string(),
            height_inches: rand_int(MANUAL_HEIGHT.min, MANUAL_HEIGHT.max, rng),
            weight_pounds: rand_int(MANUAL_WEIGHT.min, MANUAL_WEIGHT.max, rng),
        };
    };
    let height = rand_int(arch.height.min, arch.height.max, rng);
    let weight = rand_int(arch.weight.min, arch.weight.max, rng);
    Size {
        label: arch.label.clone(),
        height_inches: arch.height.widened(HEIGHT_SLACK).clamp(height),
        weight_pounds: arch.weight.widened(WEIGHT_SLACK).clamp(weight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::testing::Scripted;
    use crate::rng::Mulberry32;

    #[test]
    fn manual_size_is_clamped() {
        let s = manual_size(6, 2, 200);
        assert_eq!((s.height_inches, s.weight_pounds), (74, 200));
        assert_eq!(s.label, "Manual");

        let tiny = manual_size(3, 0, 90);
        assert_eq!((tiny.height_inches, tiny.weight_pounds), (58, 140));

        let huge = manual_size(9, 11, 999);
        assert_eq!((huge.height_inches, huge.weight_pounds), (90, 380));
    }

    #[test]
    fn manual_choice_ignores_archetypes_and_draws() {
        let data = ReferenceData::builtin();
        let mut rng = Scripted::new(&[0.5]);
        let choice = SizeChoice::Manual {
            feet: 6,
            inches: 5,
            weight_pounds: 250,
        };
        let s = resolve_size(&choice, Sport::Basketball, Position::Center, &data, &mut rng);
        assert_eq!((s.height_inches, s.weight_pounds), (77, 250));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn random_size_stays_in_band() {
        let data = ReferenceData::builtin();
        let mut rng = Mulberry32::new(11);
        for sport in Sport::ALL {
            for &pos in sport.positions() {
                let archetypes = &data.archetypes[&pos];
                for _ in 0..200 {
                    let s = resolve_size(&SizeChoice::Random, sport, pos, &data, &mut rng);
                    let arch = archetypes
                        .iter()
                        .find(|a| a.label == s.label)
                        .expect("label comes from the position's archetypes");
                    assert!(arch.height.widened(HEIGHT_SLACK).contains(s.height_inches));
                    assert!(arch.weight.widened(WEIGHT_SLACK).contains(s.weight_pounds));
                }
            }
        }
    }

    #[test]
    fn draws_archetype_then_height_then_weight() {
        let data = ReferenceData::builtin();
        // WR archetypes: Slot, Outside, Big. 0.5 -> Outside WR (72-76, 190-215).
        let mut rng = Scripted::new(&[0.5, 0.0, 0.999_999]);
        let s = resolve_size(
            &SizeChoice::Random,
            Sport::AmericanFootball,
            Position::WideReceiver,
            &data,
            &mut rng,
        );
        assert_eq!(s.label, "Outside WR");
        assert_eq!((s.height_inches, s.weight_pounds), (72, 215));
    }

    #[test]
    fn missing_position_falls_back_to_first_position() {
        let mut data = ReferenceData::builtin();
        data.archetypes.remove(&Position::Kicker);
        let mut rng = Scripted::new(&[0.0, 0.0, 0.0]);
        let s = resolve_size(
            &SizeChoice::Random,
            Sport::AmericanFootball,
            Position::Kicker,
            &data,
            &mut rng,
        );
        assert_eq!(s.label, "Pocket Passer");
    }
}
