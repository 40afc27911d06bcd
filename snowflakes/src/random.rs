use rand_chacha::rand_core::RngCore;

/// Uniform float in `[0, 1)` built from the top 53 bits of a draw.
pub fn next_float<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Uniform-ish integer in `0..bound`. `bound` must be non-zero.
pub fn next_int<R: RngCore + ?Sized>(rng: &mut R, bound: u32) -> u32 {
    (rng.next_u64() % bound as u64) as u32
}

#[cfg(test)]
mod tests {
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    use super::*;

    #[test]
    fn floats_stay_below_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..10_000 {
            let value = next_float(&mut rng);
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn ints_stay_below_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..10_000 {
            assert!(next_int(&mut rng, 40) < 40);
        }
    }
}
