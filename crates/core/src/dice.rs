//! Draws from the run's random stream and seed mixing for restarts.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Uniform draw in `min..=max`.
pub(crate) fn roll(rng: &mut ChaCha8Rng, min: usize, max: usize) -> usize {
    debug_assert!(min <= max);
    let range_size = (max - min) as u64 + 1;
    min + (rng.next_u64() % range_size) as usize
}

/// Uniform draw in `0..len`.
pub(crate) fn pick(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

/// Seed for the `restart_index`-th fresh dungeon of a session started from `run_seed`.
pub fn derive_restart_seed(run_seed: u64, restart_index: u64) -> u64 {
    if restart_index == 0 {
        return run_seed;
    }
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= restart_index.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}
