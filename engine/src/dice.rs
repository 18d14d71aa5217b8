use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

pub const DIE_FACES: u8 = 6;

/// Every random decision the engine makes goes through this trait so that a
/// session can be replayed from a seed or driven by scripted values.
pub trait RandomSource {
    /// Uniform over `1..=DIE_FACES`.
    fn roll_die(&mut self) -> u8;

    /// Uniform over `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;

    fn shuffle<T>(&mut self, items: &mut [T]);
}

#[derive(Clone, Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_rng(&mut rand::rng()))
    }
}

impl RandomSource for SeededRandom {
    fn roll_die(&mut self) -> u8 {
        self.0.random_range(1..=DIE_FACES)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0)
    }
}

pub fn roll_dice<R: RandomSource>(rng: &mut R, n: usize) -> Vec<u8> {
    (0..n).map(|_| rng.roll_die()).collect()
}

pub fn choose<'a, T, R: RandomSource>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick(items.len()))
}
