// Age resolver.

use crate::config::AgeChoice;
use crate::data::ReferenceData;
use crate::rng::{chance, rand_int, RandomStream};
use crate::sport::Sport;

/// Probability that a random age is drawn from the young end of the range.
pub const YOUNG_SKEW: f64 = 0.7;
/// Width (in years above the minimum) of the young end of the range.
pub const YOUNG_SPAN: i32 = 5;

/// Ordinary-mode age. Random ages skew young: 70% of draws come from
/// `[min, min + 5]` (capped at max), the rest from the full range. Manual ages
/// are clamped into range.
pub fn resolve_age<R: RandomStream + ?Sized>(
    choice: AgeChoice,
    sport: Sport,
    data: &ReferenceData,
    rng: &mut R,
) -> i32 {
    let bounds = data.ages.for_sport(sport).ordinary;
    match choice {
        AgeChoice::Manual(age) => bounds.clamp(age),
        AgeChoice::Random => {
            if chance(YOUNG_SKEW, rng) {
                let young_max = (bounds.min + YOUNG_SPAN).min(bounds.max);
                rand_int(bounds.min, young_max, rng)
            } else {
                rand_int(bounds.min, bounds.max, rng)
            }
        }
    }
}

/// Draft class age: uniform over the sport's rookie range.
pub fn rookie_age<R: RandomStream + ?Sized>(sport: Sport, data: &ReferenceData, rng: &mut R) -> i32 {
    let bounds = data.ages.for_sport(sport).rookie;
    rand_int(bounds.min, bounds.max, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::testing::Scripted;
    use crate::rng::Mulberry32;

    #[test]
    fn manual_age_is_clamped() {
        let data = ReferenceData::builtin();
        let mut rng = Scripted::new(&[0.5]);
        assert_eq!(resolve_age(AgeChoice::Manual(55), Sport::Basketball, &data, &mut rng), 38);
        assert_eq!(resolve_age(AgeChoice::Manual(10), Sport::AmericanFootball, &data, &mut rng), 20);
        assert_eq!(resolve_age(AgeChoice::Manual(27), Sport::AmericanFootball, &data, &mut rng), 27);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn young_branch_caps_at_min_plus_five() {
        let data = ReferenceData::builtin();
        let mut rng = Scripted::new(&[0.1, 0.999_999]);
        assert_eq!(resolve_age(AgeChoice::Random, Sport::AmericanFootball, &data, &mut rng), 25);
    }

    #[test]
    fn full_branch_reaches_max() {
        let data = ReferenceData::builtin();
        let mut rng = Scripted::new(&[0.7, 0.999_999]);
        assert_eq!(resolve_age(AgeChoice::Random, Sport::Basketball, &data, &mut rng), 38);
    }

    #[test]
    fn random_ages_in_bounds_and_skewed_young() {
        let data = ReferenceData::builtin();
        let mut rng = Mulberry32::new(21);
        let n = 10_000;
        let mut young = 0;
        for _ in 0..n {
            let age = resolve_age(AgeChoice::Random, Sport::AmericanFootball, &data, &mut rng);
            assert!((20..=40).contains(&age));
            if age <= 25 {
                young += 1;
            }
        }
        // 70% young branch + 30% * 6/21 from the full branch.
        let share = young as f64 / n as f64;
        assert!((0.75..0.82).contains(&share), "young share {share}");
    }

    #[test]
    fn rookie_ages_use_rookie_bounds() {
        let data = ReferenceData::builtin();
        let mut rng = Mulberry32::new(8);
        for _ in 0..1000 {
            assert!((21..=24).contains(&rookie_age(Sport::AmericanFootball, &data, &mut rng)));
            assert!((18..=23).contains(&rookie_age(Sport::Basketball, &data, &mut rng)));
        }
    }
}
