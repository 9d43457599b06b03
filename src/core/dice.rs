//! Dice rolling over an injected random source
//!
//! Nothing here owns an RNG. Callers pass one in, so a seeded `ChaCha8Rng`
//! gives reproducible characters and tests can pin every roll.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Roll a single die with `sides` faces (1..=sides)
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R, sides: u32) -> i32 {
    rng.gen_range(1..=sides.max(1)) as i32
}

/// Roll `count` dice of `sides` faces and sum them
pub fn roll<R: Rng + ?Sized>(rng: &mut R, count: u32, sides: u32) -> i32 {
    (0..count).map(|_| roll_die(rng, sides)).sum()
}

/// Roll `count` dice of `sides` faces and add a flat modifier
pub fn roll_with_modifier<R: Rng + ?Sized>(rng: &mut R, count: u32, sides: u32, modifier: i32) -> i32 {
    roll(rng, count, sides) + modifier
}

/// Build the production random source; `None` seeds from entropy
pub fn seeded_rng(seed: Option<u64>) -> (ChaCha8Rng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (ChaCha8Rng::seed_from_u64(seed), seed)
}
