use rand::{rngs::SmallRng, Rng, SeedableRng};

#[derive(Clone, Debug)]
pub struct MaybeSeededRng {
    seed: Option<u64>,
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { seed, rng }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// Derive a seed for a child generator, so that a seeded parent yields a reproducible family.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;

    #[test]
    fn same_seed_same_stream() {
        let mut a = MaybeSeededRng::new(Some(SEED));
        let mut b = MaybeSeededRng::new(Some(SEED));

        let xs: Vec<u64> = (0..8).map(|_| a.next_seed()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_seed()).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), Some(SEED));
    }

    #[test]
    fn unseeded() {
        let rng = MaybeSeededRng::new(None);
        assert_eq!(rng.seed(), None);
    }
}
