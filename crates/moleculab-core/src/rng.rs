use serde::Serialize;

/// Substituted whenever seed derivation produces 0, which would otherwise be
/// a degenerate starting state.
pub const FALLBACK_SEED: u32 = 1234;

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const LCG_MODULUS: f64 = 4_294_967_296.0;

/// Linear congruential generator over the full 32-bit state space.
///
/// `state' = state * 1664525 + 1013904223 (mod 2^32)`, emitted as
/// `state' / 2^32`. Pure integer arithmetic with a single division per step,
/// so the stream is bit-for-bit reproducible across platforms.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { FALLBACK_SEED } else { seed };
        Self { state }
    }

    /// Seed from the serialized form of an arbitrary input value.
    pub fn from_value<T: Serialize>(value: &T) -> Self {
        Self::new(json_seed(value))
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state as f64 / LCG_MODULUS
    }

    /// Next value in [min, max).
    pub fn in_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform index into a slice of length `len`.
    pub fn index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64) as usize
    }
}

/// Derive an integer seed from the canonical JSON encoding of `value`.
///
/// Identical input values always produce identical seeds. The length of the
/// encoding is enough spread for the generators built on top; a zero result
/// is replaced with [`FALLBACK_SEED`] at construction time.
pub fn json_seed<T: Serialize>(value: &T) -> u32 {
    serde_json::to_string(value).map_or(0, |encoded| encoded.len() as u32)
}

/// Signed 32-bit rolling hash over the UTF-16 code units of `text`:
/// `h = h * 31 + unit`, wrapping. Distinct from the LCG path and kept that
/// way; the toxicity profile is a direct function of this hash.
pub fn fold_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(unit as i32)
    })
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRng::new(1);
        let mut b = SeededRng::new(2);
        assert_ne!(a.next_f64(), b.next_f64());
    }

    #[test]
    fn values_stay_in_unit_interval() {
        let mut rng = SeededRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn zero_seed_uses_fallback() {
        let mut zero = SeededRng::new(0);
        let mut fallback = SeededRng::new(FALLBACK_SEED);
        assert_eq!(zero.next_f64(), fallback.next_f64());
    }

    #[test]
    fn in_range_respects_bounds() {
        let mut rng = SeededRng::new(99);
        for _ in 0..1000 {
            let v = rng.in_range(150.0, 550.0);
            assert!((150.0..550.0).contains(&v));
        }
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut rng = SeededRng::new(5);
        for _ in 0..1000 {
            assert!(rng.index(7) < 7);
        }
    }

    #[test]
    fn json_seed_is_encoding_length() {
        #[derive(Serialize)]
        struct Input<'a> {
            query: &'a str,
        }
        let seed = json_seed(&Input { query: "malaria" });
        assert_eq!(seed, r#"{"query":"malaria"}"#.len() as u32);
    }

    #[test]
    fn fold_hash_matches_known_vectors() {
        assert_eq!(fold_hash(""), 0);
        assert_eq!(fold_hash("Aspirin"), 957_224_812);
    }

    #[test]
    fn fold_hash_is_stable() {
        assert_eq!(fold_hash("Paracetamol"), fold_hash("Paracetamol"));
        assert_ne!(fold_hash("Aspirin"), fold_hash("aspirin"));
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(0.615), 0.62);
        assert_eq!(round2(254.814), 254.81);
        assert_eq!(round2(-7.515), -7.52);
    }
}
