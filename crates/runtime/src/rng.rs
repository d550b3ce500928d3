//! Random source backed by the `rand` crate.

use game_core::RngSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// [`RngSource`] over a seedable [`StdRng`].
///
/// The same seed always yields the same sequence within one `rand` release,
/// which is enough to replay a session locally.
#[derive(Clone, Debug)]
pub struct StdRngSource {
    rng: StdRng,
}

impl StdRngSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RngSource for StdRngSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}
