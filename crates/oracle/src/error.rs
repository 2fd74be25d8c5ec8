use std::error::Error as StdError;

use thiserror::Error;

use stable_oracle_checks::Violation;
use stable_oracle_core::{Hire, Market, Offer, PreferencesError};

/// Errors that end an oracle run.
#[derive(Debug, Error)]
pub enum Error {
    /// The matcher's output was rejected.
    #[error("trial {trial}: {violation}")]
    Violation {
        trial: usize,
        #[source]
        violation: Violation,
        counterexample: Box<Counterexample>,
    },

    /// The matcher reported a failure of its own.
    #[error("trial {trial}: matcher failed")]
    Matcher {
        trial: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The preference generator produced lists that are not permutations.
    #[error("invalid generated preferences: {0}")]
    Preferences(#[from] PreferencesError),
}

impl Error {
    pub(crate) fn matcher<E: StdError + Send + Sync + 'static>(trial: usize, err: E) -> Self {
        Self::Matcher {
            trial,
            source: Box::new(err),
        }
    }

    /// Returns the violation, if the run ended because output was rejected.
    #[must_use]
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Violation { violation, .. } => Some(violation),
            Self::Matcher { .. } | Self::Preferences(_) => None,
        }
    }

    /// Returns the input and output that produced the violation, if any.
    #[must_use]
    pub fn counterexample(&self) -> Option<&Counterexample> {
        match self {
            Self::Violation { counterexample, .. } => Some(counterexample),
            Self::Matcher { .. } | Self::Preferences(_) => None,
        }
    }
}

/// The first failing trial's input and the matcher's output for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterexample {
    pub market: Market,
    pub matching: Vec<Hire>,
    pub trace: Option<Vec<Offer>>,
}
