// Seeded pseudo-random stream and the sampling helpers built on it.
//
// Every attribute resolver draws from a `RandomStream` so a whole batch is
// reproducible from one 32-bit seed. The generator is mulberry32: 32 bits of
// state, fast, and good enough for uniform attribute sampling. It is not a
// cryptographic generator.

/// A source of floats in `[0, 1)`.
///
/// Resolvers take `&mut dyn RandomStream` (or a generic bound) so tests can
/// script the exact draws they want.
pub trait RandomStream {
    /// Return the next float in `[0, 1)`, advancing the stream.
    fn next_unit(&mut self) -> f64;
}

impl<T: RandomStream + ?Sized> RandomStream for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

// ---------------------------------------------------------------------------
// mulberry32
// ---------------------------------------------------------------------------

/// Deterministic 32-bit generator. Same seed, same infinite sequence.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from a user-supplied seed string, or from the thread RNG when the
    /// string is absent or blank. Returns the generator and the seed used so
    /// the caller can report it and replay the run later.
    pub fn from_seed_text(seed: Option<&str>) -> (Self, u32) {
        let seed = resolve_seed(seed);
        (Self::new(seed), seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl RandomStream for Mulberry32 {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

// ---------------------------------------------------------------------------
// Seed derivation
// ---------------------------------------------------------------------------

/// Order-sensitive 32-bit string hash (FNV-1a over UTF-16 code units).
pub fn hash32(s: &str) -> u32 {
    s.encode_utf16().fold(0x811c_9dc5_u32, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(0x0100_0193)
    })
}

/// Hash a non-blank seed string, otherwise draw a fresh random seed.
pub fn resolve_seed(seed: Option<&str>) -> u32 {
    match seed.map(str::trim) {
        Some(text) if !text.is_empty() => hash32(text),
        _ => rand::random::<u32>(),
    }
}

// ---------------------------------------------------------------------------
// Sampling helpers
// ---------------------------------------------------------------------------

/// Uniform pick from a non-empty slice.
///
/// Returns `None` only for an empty slice. Consumes exactly one draw either
/// way so the stream stays aligned.
pub fn pick<'a, T, R: RandomStream + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    let r = rng.next_unit();
    if items.is_empty() {
        return None;
    }
    let idx = ((r * items.len() as f64) as usize).min(items.len() - 1);
    items.get(idx)
}

/// Uniform integer in the inclusive range `[min, max]`. Bounds may be given
/// in either order.
pub fn rand_int<R: RandomStream + ?Sized>(min: i32, max: i32, rng: &mut R) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = f64::from(hi) - f64::from(lo) + 1.0;
    let offset = (rng.next_unit() * span).floor();
    // next_unit() < 1.0, so offset < span; the min() only guards rounding.
    (f64::from(lo) + offset).min(f64::from(hi)) as i32
}

/// `true` with probability `p`.
pub fn chance<R: RandomStream + ?Sized>(p: f64, rng: &mut R) -> bool {
    rng.next_unit() < p
}


#[cfg(test)]
mod tests {
    use super::testing::Scripted;
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Mulberry32::new(42);
        let mut b = Mulberry32::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a: Vec<u32> = {
            let mut g = Mulberry32::new(1);
            (0..8).map(|_| g.next_u32()).collect()
        };
        let b: Vec<u32> = {
            let mut g = Mulberry32::new(2);
            (0..8).map(|_| g.next_u32()).collect()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn unit_floats_stay_in_half_open_interval() {
        let mut g = Mulberry32::new(0xdead_beef);
        for _ in 0..10_000 {
            let v = g.next_unit();
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn unit_floats_are_roughly_uniform() {
        let mut g = Mulberry32::new(7);
        let mut buckets = [0usize; 10];
        let n = 100_000;
        for _ in 0..n {
            buckets[(g.next_unit() * 10.0) as usize] += 1;
        }
        for (i, &count) in buckets.iter().enumerate() {
            let share = count as f64 / n as f64;
            assert!((0.09..0.11).contains(&share), "bucket {i} share {share}");
        }
    }

    #[test]
    fn hash32_known_values() {
        // FNV-1a offset basis for the empty string.
        assert_eq!(hash32(""), 0x811c_9dc5);
        assert_eq!(hash32("a"), 0xe40c_292c);
        assert_eq!(hash32("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn hash32_is_order_sensitive() {
        assert_ne!(hash32("ab"), hash32("ba"));
    }

    #[test]
    fn seed_text_is_trimmed_before_hashing() {
        assert_eq!(resolve_seed(Some("  abc123 ")), hash32("abc123"));
    }

    #[test]
    fn blank_seed_text_draws_random_seed() {
        // Two random draws colliding is possible but vanishingly unlikely;
        // check a handful to keep the test stable.
        let seeds: Vec<u32> = (0..4).map(|_| resolve_seed(Some("   "))).collect();
        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn from_seed_text_reports_seed_used() {
        let (mut g, seed) = Mulberry32::from_seed_text(Some("abc123"));
        assert_eq!(seed, hash32("abc123"));
        let mut h = Mulberry32::new(seed);
        assert_eq!(g.next_u32(), h.next_u32());
    }

    #[test]
    fn rand_int_covers_inclusive_bounds() {
        let mut low = Scripted::new(&[0.0]);
        assert_eq!(rand_int(3, 7, &mut low), 3);
        let mut high = Scripted::new(&[0.999_999]);
        assert_eq!(rand_int(3, 7, &mut high), 7);
        let mut swapped = Scripted::new(&[0.0]);
        assert_eq!(rand_int(7, 3, &mut swapped), 3);
    }

    #[test]
    fn pick_consumes_one_draw_even_when_empty() {
        let mut s = Scripted::new(&[0.5]);
        let empty: [u8; 0] = [];
        assert!(pick(&empty, &mut s).is_none());
        assert_eq!(s.consumed(), 1);
        assert_eq!(pick(&[10, 20, 30, 40], &mut s), Some(&30));
    }

    #[test]
    fn chance_compares_strictly() {
        let mut s = Scripted::new(&[0.85, 0.84]);
        assert!(!chance(0.85, &mut s));
        assert!(chance(0.85, &mut s));
    }
}
