use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use stable_oracle_core::{Market, Preferences, PreferencesError};

use crate::Config;

/// A source of preference lists for generated markets.
pub trait PreferenceGenerator {
    /// Returns `n` preference lists, each ranking `0..n`.
    ///
    /// The oracle validates the lists before use, so an implementation that
    /// returns something other than `n` permutations fails the run.
    fn generate(&mut self, n: usize) -> Vec<Vec<usize>>;

    /// Returns the seed that reproduces this generator's output, if known.
    fn seed(&self) -> Option<u64> {
        None
    }
}

/// Generates independent, uniformly random permutations.
///
/// Each list is `0..n` shuffled with Fisher–Yates over a `ChaCha8` stream,
/// so a given seed always produces the same sequence of markets.
#[derive(Debug, Clone)]
pub struct UniformGenerator {
    rng: ChaCha8Rng,
    seed: u64,
}

impl UniformGenerator {
    /// Creates a generator that reproduces the sequence for `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator with a fresh random seed.
    ///
    /// The seed is still recorded, so a failing run can be replayed with
    /// [`UniformGenerator::seeded`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// Creates a generator for `config`: seeded if the config has a seed,
    /// otherwise from entropy.
    #[must_use]
    pub fn for_config(config: &Config) -> Self {
        config.seed().map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Returns the seed this generator was created with.
    #[must_use]
    pub fn initial_seed(&self) -> u64 {
        self.seed
    }
}

impl PreferenceGenerator for UniformGenerator {
    fn generate(&mut self, n: usize) -> Vec<Vec<usize>> {
        (0..n)
            .map(|_| {
                let mut list: Vec<usize> = (0..n).collect();
                list.shuffle(&mut self.rng);
                list
            })
            .collect()
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}

/// Generates a market of size `n`: company lists first, then candidate lists.
///
/// # Errors
///
/// Returns an error if the generator produces lists that are not `n`
/// permutations of `0..n` for either side.
pub fn generate_market<G>(generator: &mut G, n: usize) -> Result<Market, PreferencesError>
where
    G: PreferenceGenerator + ?Sized,
{
    let companies = checked(generator.generate(n), n)?;
    let candidates = checked(generator.generate(n), n)?;
    Market::new(companies, candidates)
}

fn checked(lists: Vec<Vec<usize>>, n: usize) -> Result<Preferences, PreferencesError> {
    if lists.len() != n {
        return Err(PreferencesError::Count {
            len: lists.len(),
            expected: n,
        });
    }
    Preferences::new(lists)
}
