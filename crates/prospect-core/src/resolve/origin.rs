// Origin resolver: college or country.

use crate::config::OriginMode;
use crate::data::ReferenceData;
use crate::player::Origin;
use crate::rng::{chance, pick, RandomStream};

/// Share of fully random origins that come from a country instead of a college.
pub const INTERNATIONAL_SHARE: f64 = 0.2;

/// Placeholder value when an injected college or country list is empty.
const UNKNOWN_ORIGIN: &str = "Unknown";

pub fn resolve_origin<R: RandomStream + ?Sized>(
    mode: &OriginMode,
    data: &ReferenceData,
    rng: &mut R,
) -> Origin {
    match mode {
        OriginMode::College(name) => Origin::college(name.clone()),
        OriginMode::Country(name) => Origin::country(name.clone()),
        OriginMode::RandomCollege => Origin::college(draw(&data.colleges, rng)),
        OriginMode::RandomCountry => Origin::country(draw(&data.countries, rng)),
        OriginMode::Random => {
            if chance(INTERNATIONAL_SHARE, rng) {
                Origin::country(draw(&data.countries, rng))
            } else {
                Origin::college(draw(&data.colleges, rng))
            }
        }
    }
}

fn draw<R: RandomStream + ?Sized>(list: &[String], rng: &mut R) -> String {
    pick(list, rng)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_ORIGIN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::OriginType;
    use crate::rng::testing::Scripted;
    use crate::rng::Mulberry32;

    #[test]
    fn fixed_modes_return_manual_value_without_draws() {
        let data = ReferenceData::builtin();
        let mut rng = Scripted::new(&[0.5]);
        let o = resolve_origin(&OriginMode::College("Purdue".into()), &data, &mut rng);
        assert_eq!(o, Origin::college("Purdue"));
        let o = resolve_origin(&OriginMode::Country("Japan".into()), &data, &mut rng);
        assert_eq!(o, Origin::country("Japan"));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn random_college_draws_from_college_list() {
        let data = ReferenceData::builtin();
        let mut rng = Scripted::new(&[0.0]);
        let o = resolve_origin(&OriginMode::RandomCollege, &data, &mut rng);
        assert_eq!(o, Origin::college(data.colleges[0].clone()));
    }

    #[test]
    fn random_mode_splits_on_first_draw() {
        let data = ReferenceData::builtin();
        // First draw below 0.2 -> country, then pick index 0.
        let mut rng = Scripted::new(&[0.1, 0.0]);
        let o = resolve_origin(&OriginMode::Random, &data, &mut rng);
        assert_eq!(o, Origin::country(data.countries[0].clone()));
        // First draw at or above 0.2 -> college.
        let mut rng = Scripted::new(&[0.2, 0.0]);
        let o = resolve_origin(&OriginMode::Random, &data, &mut rng);
        assert_eq!(o, Origin::college(data.colleges[0].clone()));
    }

    #[test]
    fn random_mode_is_mostly_college() {
        let data = ReferenceData::builtin();
        let mut rng = Mulberry32::new(5);
        let n = 10_000;
        let colleges = (0..n)
            .filter(|_| resolve_origin(&OriginMode::Random, &data, &mut rng).kind == OriginType::College)
            .count();
        let share = colleges as f64 / n as f64;
        assert!((0.77..0.83).contains(&share), "college share {share}");
    }

    #[test]
    fn empty_list_yields_placeholder() {
        let mut data = ReferenceData::builtin();
        data.countries.clear();
        let mut rng = Scripted::new(&[0.3]);
        let o = resolve_origin(&OriginMode::RandomCountry, &data, &mut rng);
        assert_eq!(o.value, "Unknown");
    }
}
