use thiserror::Error;

/// Configuration for an oracle run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    trials: usize,
    size: usize,
    seed: Option<u64>,
}

/// Errors that can occur when validating an oracle config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("trials must be at least 1")]
    Trials,

    #[error("size must be at least 1")]
    Size,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(64, 6).unwrap()
    }
}

impl Config {
    /// Creates a new unseeded config.
    ///
    /// # Errors
    ///
    /// Returns an error if `trials` or `size` is zero.
    pub fn new(trials: usize, size: usize) -> Result<Self, ConfigError> {
        if trials == 0 {
            return Err(ConfigError::Trials);
        }
        if size == 0 {
            return Err(ConfigError::Size);
        }

        Ok(Self {
            trials,
            size,
            seed: None,
        })
    }

    /// Returns a copy of this config that generates markets from `seed`.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Returns the number of randomized trials to run.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns `N`, the number of agents on each side of a generated market.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the generator seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_trials() {
        assert_eq!(Config::new(0, 4), Err(ConfigError::Trials));
    }

    #[test]
    fn rejects_empty_markets() {
        assert_eq!(Config::new(4, 0), Err(ConfigError::Size));
    }

    #[test]
    fn default_is_unseeded() {
        let config = Config::default();
        assert_eq!(config.trials(), 64);
        assert_eq!(config.size(), 6);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn with_seed_keeps_limits() {
        let config = Config::new(3, 5).unwrap().with_seed(7);
        assert_eq!(config.trials(), 3);
        assert_eq!(config.size(), 5);
        assert_eq!(config.seed(), Some(7));
    }
}
